//! 时间类型模块
//!
//! 提供两种时间类型：
//! - `Timestamp`: 可序列化的毫秒时间戳，用于传输和存储（账单日期、质保到期日）
//! - `Date`: 操作型时间类型，封装 `js_sys::Date`，仅用于获取当前时间
//!
//! 历法运算（按年推进、格式化）用纯整数算法实现，不依赖 JS 环境，
//! 因此可以在宿主平台上直接做单元测试。

use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 86_400_000;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

/// 公历日期 -> 纪元日序号
///
/// 对超出月末的 `d` 线性外推（如平年 2 月 29 日等价于 3 月 1 日），
/// 与 JS `Date.setFullYear` 的行为一致。
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// 纪元日序号 -> 公历日期 (y, m, d)
fn civil_from_days(z: i64) -> (i64, i64, i64) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 按公历年份推进
    ///
    /// 保留月、日和当日时刻。平年不存在的 2 月 29 日顺延为 3 月 1 日。
    pub fn add_years(self, years: i32) -> Self {
        let days = self.0.div_euclid(MS_PER_DAY);
        let ms_of_day = self.0.rem_euclid(MS_PER_DAY);
        let (y, m, d) = civil_from_days(days);
        let shifted = days_from_civil(y + years as i64, m, d);
        Self(shifted * MS_PER_DAY + ms_of_day)
    }

    /// 格式化为 `YYYY-MM-DD`（UTC）
    pub fn format_ymd(&self) -> String {
        let (y, m, d) = civil_from_days(self.0.div_euclid(MS_PER_DAY));
        format!("{y:04}-{m:02}-{d:02}")
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

/// 操作型时间类型，封装 js_sys::Date
///
/// 只在浏览器环境下调用。
#[derive(Debug, Clone)]
pub struct Date(js_sys::Date);

impl Date {
    /// 获取当前时间
    #[inline]
    pub fn now() -> Self {
        Self(js_sys::Date::new_0())
    }

    /// 获取当前时间的毫秒时间戳
    #[inline]
    pub fn now_timestamp() -> Timestamp {
        Timestamp(js_sys::Date::now() as i64)
    }

    /// 转换为时间戳
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        Timestamp(self.0.get_time() as i64)
    }
}

impl From<Date> for Timestamp {
    fn from(date: Date) -> Self {
        date.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-05-15T12:00:00Z
    const MAY_15_2024: i64 = 1_715_774_400_000;

    #[test]
    fn civil_roundtrip() {
        for days in [-719_468, -1, 0, 1, 19_858, 738_000] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days);
        }
    }

    #[test]
    fn epoch_is_1970_01_01() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(Timestamp::new(0).format_ymd(), "1970-01-01");
    }

    #[test]
    fn add_years_keeps_month_day_and_time_of_day() {
        let ts = Timestamp::new(MAY_15_2024);
        let shifted = ts.add_years(3);
        assert_eq!(shifted.format_ymd(), "2027-05-15");
        // 当日时刻不变
        assert_eq!(
            shifted.as_millis().rem_euclid(MS_PER_DAY),
            ts.as_millis().rem_euclid(MS_PER_DAY)
        );
    }

    #[test]
    fn add_zero_years_is_identity() {
        let ts = Timestamp::new(MAY_15_2024);
        assert_eq!(ts.add_years(0), ts);
    }

    #[test]
    fn leap_day_rolls_over_like_js_set_full_year() {
        // 2024-02-29T00:00:00Z
        let leap = Timestamp::new(1_709_164_800_000);
        assert_eq!(leap.format_ymd(), "2024-02-29");
        assert_eq!(leap.add_years(1).format_ymd(), "2025-03-01");
        assert_eq!(leap.add_years(4).format_ymd(), "2028-02-29");
    }

    #[test]
    fn pre_epoch_dates_format() {
        // -1 天 = 1969-12-31
        let ts = Timestamp::new(-MS_PER_DAY);
        assert_eq!(ts.format_ymd(), "1969-12-31");
    }
}
