pub mod interval;
pub mod life_delta;
pub mod life_score;
pub mod risk_factor;

pub use interval::ConfidenceInterval;
pub use life_delta::LifeDelta;
pub use life_score::LifeScore;
pub use risk_factor::RiskFactor;
