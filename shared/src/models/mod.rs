//! Wire-facing domain models
//!
//! Entities carry plain string ids (`"table:id"`); the server's persistence
//! layer owns the native record-id representation and converts at the API
//! boundary. Request payloads live next to the entity they create or update.

pub mod account;
pub mod category;
pub mod contact;
pub mod order;
pub mod product;
pub mod stats;

pub use account::{
    AdminLoginRequest, AdminProfile, AdminRegisterRequest, AuthResponse, Customer,
    CustomerLoginRequest, CustomerRegisterRequest, CustomerUpdateRequest,
};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use contact::{ContactMessage, ContactMessageCreate};
pub use order::{
    CustomerContact, CustomerInfo, Order, OrderCreateRequest, OrderItem, OrderItemRequest,
    OrderStatus, PaymentInfo, PaymentSelection, PaymentStatus, RefundInfo, RefundRequest,
    ShippingAddress, ShippingInfo, ShippingSelection, StatusHistoryEntry, StatusUpdateRequest,
    Totals,
};
pub use product::{
    ColorOption, CustomizationOption, CustomizationType, Product, ProductCreate, ProductUpdate,
    SizeOption,
};
pub use stats::StatsSnapshot;
