//! Reply text for orders.

use chrono::{DateTime, Utc};
use hellbot_core::MajorOrder;

/// Reply when there are no active orders.
pub const NO_ACTIVE_ORDERS: &str =
    "No Major Orders right now, soldier. Stand by for instructions from Super Earth.";

/// Reply when the orders could not be obtained.
pub const ORDERS_UNAVAILABLE: &str = "Error: Unable to fetch Major Orders";

/// Time until `expiration` as `"D days, H hours, and M minutes"`.
///
/// Already expired orders read as zero.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use hellbot_social::format_time_remaining;
///
/// let now = Utc::now();
/// let expiration = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4);
/// assert_eq!(
///     format_time_remaining(expiration, now),
///     "2 days, 3 hours, and 4 minutes"
/// );
/// ```
pub fn format_time_remaining(expiration: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let remaining = (expiration - now).max(chrono::Duration::zero());
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;
    let day_label = if days == 1 { "day" } else { "days" };
    format!("{days} {day_label}, {hours} hours, and {minutes} minutes")
}

/// Multi-line summary of one order.
pub fn format_order(order: &MajorOrder, now: DateTime<Utc>) -> String {
    format!(
        "Soldier, your orders are as follows:\nMajor Order: {}\nRewards: {} {}\nExpires in: {}",
        order.briefing(),
        order.reward_amount(),
        order.reward_type(),
        format_time_remaining(*order.expiration(), now)
    )
}
