pub mod stage1_reshape;
pub mod stage2_human;
pub mod stage3_validation;
pub mod stage4_agreement;
pub mod stage5_paired;
pub mod stage6_charts;
