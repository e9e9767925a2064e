pub mod app_config;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod money;
pub mod orders;
pub mod payment;
pub mod route;
pub mod session;

pub use app_config::{AppConfig, Environment};
pub use cart::{Cart, CartItem, CartTotals, ProductRef};
pub use checkout::{checkout, CheckoutOutcome, PaymentGateway, PaymentMethod};
pub use config::{load_app_config, load_app_config_from_env};
pub use money::{format_count, format_currency, format_vnd};
pub use orders::{parse_order_date, DashboardSummary, Order, OrderDetail, OrderStatus};
pub use payment::{
    AmountSource, CreatePaymentRequest, CreatePaymentResponse, PaymentAmount, PaymentReceipt,
    PaymentReturn,
};
pub use route::Route;
pub use session::{resolve_token, KeyValueStore, MemoryStore, Session};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read session file {path}: {source}")]
    SessionFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session file {path}: {source}")]
    SessionFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
