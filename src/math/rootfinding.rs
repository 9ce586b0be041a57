use argmin::core::{
    CostFunction,
    Error as ArgminError,
    Executor,
    State
};
use argmin::solver::brent::BrentRoot;
use thiserror::Error;
use tracing::debug;

/// Brent 求根的最大迭代次數，確保計算時間有界
pub const MAX_ROOT_ITERATIONS: u64 = 100;

/// 求根容許誤差（以自變數衡量）
pub const ROOT_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("root search failed: {0}")]
    Solver(String),
    #[error("root search on [{min}, {max}] returned no parameter")]
    NoSolution { min: f64, max: f64 }
}

// ─────────────────────────────────────────────────────────────────────────────
// 將閉包包裝成 argmin 的 CostFunction
// ─────────────────────────────────────────────────────────────────────────────

struct ScalarEquation<F> where
    F: Fn(f64) -> f64 {
    equation: F
}

impl<F> CostFunction for ScalarEquation<F> where
    F: Fn(f64) -> f64 {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, ArgminError> {
        Ok((self.equation)(*x))
    }
}

/// 在 [min, max] 上以 Brent 法求 `equation(x) = 0` 的根。
///
/// # 前置條件
/// `equation(min)` 與 `equation(max)` 異號（或其一為 0）。
///
/// 回傳 solver 最後的迭代點（cost 有正有負，best param 不代表最接近根）。
pub fn brent_root<F>(min: f64, max: f64, equation: F) -> Result<f64, RootFindingError> where
    F: Fn(f64) -> f64 {
    let problem = ScalarEquation { equation };
    let solver = BrentRoot::new(min, max, ROOT_TOLERANCE);
    let result = Executor::new(problem, solver)
        .configure(|state| state.max_iters(MAX_ROOT_ITERATIONS))
        .run()
        .map_err(|error| RootFindingError::Solver(error.to_string()))?;

    let state = result.state();
    debug!(iterations = state.get_iter(), min, max, "brent root search finished");
    state
        .get_param()
        .copied()
        .ok_or(RootFindingError::NoSolution { min, max })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn brent_root_finds_square_root() {
        let root = brent_root(0.0, 3.0, |x| x * x - 2.0).unwrap();
        assert_relative_eq!(root, 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn brent_root_rejects_unbracketed_equation() {
        assert!(brent_root(0.0, 1.0, |x| x * x + 1.0).is_err());
    }
}
