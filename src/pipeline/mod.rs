pub mod stage1_collect;
pub mod stage2_score;
pub mod stage3_table;
pub mod stage4_report;
