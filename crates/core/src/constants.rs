use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Month-over-month changes smaller than this are reported as stable
pub const DEFAULT_TREND_THRESHOLD: Decimal = dec!(10);

/// Progress percentage at or above which a goal counts as on track
pub const DEFAULT_ON_TRACK_THRESHOLD: Decimal = dec!(90);

/// Confidence lost per projected month
pub const DEFAULT_CONFIDENCE_DECAY: Decimal = dec!(0.2);

/// Monthly data points required before any projection is made
pub const DEFAULT_MIN_MONTHS_FOR_PROJECTION: usize = 3;

/// Most recent monthly points averaged to estimate the month-over-month change
pub const PROJECTION_AVERAGE_WINDOW: usize = 3;

/// Months projected forward when the caller does not ask for a specific horizon
pub const DEFAULT_PROJECTION_MONTHS: usize = 3;

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const ONE_HUNDRED: Decimal = dec!(100);

/// Short month labels used for series and projection points
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
