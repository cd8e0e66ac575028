//! # blink-analysis - 眨眼检测与分类
//!
//! 本 crate 从逐帧归一化眼睑面积信号 (0.0 闭眼 ~ 1.0 睁眼) 中检测眨眼，
//! 并按闭合深度分为完全眨眼与不完全眨眼。
//!
//! - **BlinkDetector** - 单次遍历的两状态 (Idle / InBlink) 事件检测器
//! - **StatsAggregator** - 由信号与眨眼事件计算汇总统计
//!
//! ## 模块结构
//!
//! - [`blink`] - 眨眼检测
//! - [`stats`] - 汇总统计
//! - [`analysis`] - 校验 + 检测 + 统计，批量并行分析
//! - [`chart`] - 图表数据 (极小值标记、阈值参考线)
//! - [`config`] - 检测阈值配置
//! - [`sanitize`] - 信号校验与修复
//! - [`input`] - 信号文本解析
//! - [`synthetic`] - 合成演示信号
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use blink_analysis::{aggregate, detect, BlinkKind, DetectionConfig};
//!
//! let signal = [1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0];
//! let events = detect(&signal, &DetectionConfig::default());
//! assert_eq!(events[0].frame_index, 5);
//! assert_eq!(events[0].kind, BlinkKind::Complete);
//!
//! let summary = aggregate(&signal, &events);
//! assert_eq!(summary.complete_count, 1);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod analysis;
pub mod blink;
pub mod chart;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod sanitize;
pub mod stats;
pub mod synthetic;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

pub use analysis::{analyze, analyze_batch};
pub use blink::{detect, BlinkDetector};
pub use config::DetectionConfig;
pub use error::{AnalysisError, Result};
pub use stats::aggregate;
