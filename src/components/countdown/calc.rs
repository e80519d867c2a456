//! Time remaining until the next Valentine's Day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone};

const MONTH: u32 = 2;
const DAY: u32 = 14;

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Longest DST gap searched past a missing local midnight.
const MAX_GAP_MINUTES: i64 = 3 * 60;

/// Whole days, hours, minutes and seconds left, each truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
}

/// The four display strings, zero-padded to at least two digits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountdownText {
	pub days: String,
	pub hours: String,
	pub minutes: String,
	pub seconds: String,
}

/// Left-pads to two digits. Wider values are kept whole.
pub fn pad(value: i64) -> String {
	format!("{value:02}")
}

impl Countdown {
	pub const ZERO: Countdown = Countdown {
		days: 0,
		hours: 0,
		minutes: 0,
		seconds: 0,
	};

	/// Splits a number of seconds into days, hours, minutes and seconds.
	/// Non-positive input is all zero.
	pub fn from_secs(total: i64) -> Self {
		if total <= 0 {
			return Self::ZERO;
		}
		Self {
			days: total / SECS_PER_DAY,
			hours: total % SECS_PER_DAY / SECS_PER_HOUR,
			minutes: total % SECS_PER_HOUR / SECS_PER_MINUTE,
			seconds: total % SECS_PER_MINUTE,
		}
	}

	pub fn text(&self) -> CountdownText {
		CountdownText {
			days: pad(self.days),
			hours: pad(self.hours),
			minutes: pad(self.minutes),
			seconds: pad(self.seconds),
		}
	}
}

/// First instant at or after the wall-clock time `naive` that `resolve` maps
/// to a real instant, stepping a minute at a time through any DST gap.
fn first_valid_local<T>(
	naive: NaiveDateTime,
	resolve: impl Fn(&NaiveDateTime) -> Option<T>,
) -> Option<T> {
	(0..=MAX_GAP_MINUTES).find_map(|m| resolve(&(naive + Duration::minutes(m))))
}

/// Midnight of Feb 14 in `year`, in `tz`.
///
/// When local midnight falls in a DST gap the first valid local time after it
/// is used. An ambiguous midnight resolves to the earlier instant.
fn valentines_midnight<Tz: TimeZone>(tz: &Tz, year: i32) -> Option<DateTime<Tz>> {
	let naive = NaiveDate::from_ymd_opt(year, MONTH, DAY)?.and_hms_opt(0, 0, 0)?;
	first_valid_local(naive, |t| tz.from_local_datetime(t).earliest())
}

/// Time left from `now` until the next Feb 14 local midnight.
///
/// This year's date is the target unless `now` is already past it, in which
/// case next year's is. Reaching the target exactly yields all zeros.
pub fn compute<Tz: TimeZone>(now: &DateTime<Tz>) -> Countdown {
	let tz = now.timezone();
	let year = now.year();

	let Some(mut target) = valentines_midnight(&tz, year) else {
		return Countdown::ZERO;
	};
	if *now > target {
		match valentines_midnight(&tz, year + 1) {
			Some(next) => target = next,
			None => return Countdown::ZERO,
		}
	}

	let remaining = target.signed_duration_since(now);
	if remaining.num_milliseconds() <= 0 {
		return Countdown::ZERO;
	}
	Countdown::from_secs(remaining.num_seconds())
}

#[cfg(test)]
mod tests {
	use chrono::{FixedOffset, Utc};

	use super::*;

	fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
		Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
	}

	#[test]
	fn one_second_before_midnight() {
		let text = compute(&at(2025, 2, 13, 23, 59, 59)).text();
		assert_eq!(
			text,
			CountdownText {
				days: "00".into(),
				hours: "00".into(),
				minutes: "00".into(),
				seconds: "01".into(),
			}
		);
	}

	#[test]
	fn exactly_at_midnight_is_all_zero() {
		for year in [2024, 2025, 2100] {
			assert_eq!(compute(&at(year, 2, 14, 0, 0, 0)), Countdown::ZERO);
		}
		assert_eq!(Countdown::ZERO.text().seconds, "00");
	}

	#[test]
	fn day_after_rolls_to_next_year() {
		// 2027-02-15 -> 2028-02-14 spans no leap day.
		assert_eq!(compute(&at(2027, 2, 15, 0, 0, 0)).days, 364);
		// 2028-02-15 -> 2029-02-14 spans 2028-02-29.
		assert_eq!(compute(&at(2028, 2, 15, 0, 0, 0)).days, 365);
	}

	#[test]
	fn just_after_midnight_targets_next_year() {
		let c = compute(&at(2025, 2, 14, 0, 0, 1));
		assert_eq!(
			c,
			Countdown {
				days: 364,
				hours: 23,
				minutes: 59,
				seconds: 59
			}
		);
	}

	#[test]
	fn decomposes_with_truncation() {
		let now = at(2025, 1, 1, 12, 30, 15) + Duration::milliseconds(999);
		// 43d 11h 29m 44.001s left
		let c = compute(&now);
		assert_eq!(
			c,
			Countdown {
				days: 43,
				hours: 11,
				minutes: 29,
				seconds: 44
			}
		);
	}

	#[test]
	fn half_second_left_reads_as_zero() {
		let now = at(2025, 2, 13, 23, 59, 59) + Duration::milliseconds(500);
		assert_eq!(compute(&now), Countdown::ZERO);
	}

	#[test]
	fn midnight_is_local_to_the_offset() {
		let tz = FixedOffset::east_opt(9 * 3600).unwrap();
		let now = tz.with_ymd_and_hms(2025, 2, 13, 23, 0, 0).unwrap();
		assert_eq!(
			compute(&now),
			Countdown {
				days: 0,
				hours: 1,
				minutes: 0,
				seconds: 0
			}
		);
	}

	#[test]
	fn never_negative_across_the_year() {
		let mut now = at(2023, 12, 31, 23, 0, 0);
		let end = at(2025, 1, 2, 0, 0, 0);
		while now < end {
			let c = compute(&now);
			assert!(c.days >= 0 && c.days <= 366);
			assert!((0..24).contains(&c.hours));
			assert!((0..60).contains(&c.minutes));
			assert!((0..60).contains(&c.seconds));
			now += Duration::hours(7);
		}
	}

	#[test]
	fn padding_keeps_wide_values_whole() {
		assert_eq!(pad(0), "00");
		assert_eq!(pad(7), "07");
		assert_eq!(pad(10), "10");
		assert_eq!(pad(123), "123");
		assert_eq!(Countdown::from_secs(123 * 86_400 + 5).text().days, "123");
	}

	#[test]
	fn missing_midnight_moves_forward_past_the_gap() {
		let midnight = NaiveDate::from_ymd_opt(2025, 2, 14)
			.and_then(|d| d.and_hms_opt(0, 0, 0))
			.unwrap();
		let gap_end = midnight + Duration::hours(1);
		// Wall-clock times inside [00:00, 01:00) do not exist.
		let resolved = first_valid_local(midnight, |t| (*t >= gap_end).then_some(*t));
		assert_eq!(resolved, Some(gap_end));
	}

	#[test]
	fn existing_midnight_is_used_as_is() {
		let midnight = NaiveDate::from_ymd_opt(2025, 2, 14)
			.and_then(|d| d.and_hms_opt(0, 0, 0))
			.unwrap();
		assert_eq!(first_valid_local(midnight, |t| Some(*t)), Some(midnight));
		assert_eq!(first_valid_local(midnight, |_| None::<NaiveDateTime>), None);
	}
}
