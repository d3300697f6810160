/// Number of project rows per table page.
pub const PAGE_SIZE: usize = 5;

/// Currency token stripped from monetary strings before parsing.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Decimal places used when displaying monetary totals.
pub const MONEY_PRECISION: u32 = 2;

/// Decimal places used when displaying counts.
pub const COUNT_PRECISION: u32 = 0;
