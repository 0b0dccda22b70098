pub mod decision_record;
pub mod weight_pair;

pub use decision_record::DecisionRecord;
pub use weight_pair::WeightPair;
