use serde::{
    Deserialize,
    Serialize
};

/// 閉區間 [min, max]，用於質量夾限與積分範圍。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassInterval {
    min: f64,
    max: f64
}

impl MassInterval {
    pub fn new(min: f64, max: f64) -> MassInterval {
        debug_assert!(min <= max, "interval lower bound {} above upper bound {}", min, max);
        MassInterval { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: f64) -> f64 {
        value_in_interval(x, *self)
    }

    /// 與另一區間的交集；不相交時回傳 `None`。
    pub fn intersect(&self, other: &MassInterval) -> Option<MassInterval> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min < max {
            Some(MassInterval { min, max })
        } else {
            None
        }
    }
}

impl From<[f64; 2]> for MassInterval {
    fn from(bounds: [f64; 2]) -> Self {
        MassInterval::new(bounds[0], bounds[1])
    }
}

/// 將 `x` 夾限在 `interval` 之內。
pub fn value_in_interval(x: f64, interval: impl Into<MassInterval>) -> f64 {
    let interval = interval.into();
    if x < interval.min {
        interval.min
    } else if x > interval.max {
        interval.max
    } else {
        x
    }
}
