//! 支付处理方实现

mod paystack_processor;

pub use paystack_processor::*;
