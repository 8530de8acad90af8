//! Core schema types for the Billforge API.
//!
//! This crate mirrors the request and response shapes of the Billforge
//! billing platform's REST API:
//!
//! - **Identifiers**: prefixed, pattern-validated ids (`ProductId`,
//!   `CustomerId`, `TransactionId`, ...)
//! - **Money**: `Amount`, `CurrencyCode`, `Money`
//! - **Catalog**: `Product`, `Price` and their create/update shapes
//! - **Billing**: `Customer`, `Address`, `Business`, `Transaction`,
//!   `Subscription`, `Discount`, `Adjustment`
//! - **Eventing**: `Event`, `NotificationSetting`, `Notification`
//! - **Envelopes**: the `{ data, meta }` wrappers and the error body
//!
//! Validation happens at the edges: constrained values (`Amount`,
//! identifiers, `DiscountCode`, `CurrencyCode`, ...) reject malformed input
//! during deserialization, so a decoded value is known to satisfy its
//! declared constraints. Relational integrity (whether a referenced product
//! exists, whether a discount is redeemable) is the platform's job, not this
//! crate's.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod adjustment;
pub mod catalog;
pub mod common;
pub mod customer;
pub mod discount;
pub mod envelope;
pub mod ids;
pub mod money;
pub mod notification;
pub mod report;
pub mod subscription;
pub mod transaction;

pub use adjustment::{
    Adjustment, AdjustmentAction, AdjustmentCreate, AdjustmentItem, AdjustmentItemCreate,
    AdjustmentItemTotals, AdjustmentItemType, AdjustmentStatus, AdjustmentTotals, CreditNote,
};
pub use catalog::{
    Price, PriceCreate, PriceQuantity, PriceUpdate, Product, ProductCreate, ProductUpdate,
    TaxCategory, UnitPriceOverride,
};
pub use common::{
    CollectionMode, CustomData, Duration, DurationError, EntityStatus, Frequency, Interval,
    TaxMode, TimePeriod,
};
pub use customer::{
    Address, AddressCreate, AddressUpdate, Business, BusinessCreate, BusinessUpdate, Contact,
    Customer, CustomerCreate, CustomerUpdate,
};
pub use discount::{
    Discount, DiscountCode, DiscountCodeError, DiscountCreate, DiscountStatus, DiscountType,
    DiscountUpdate,
};
pub use envelope::{
    Envelope, ErrorDetail, ErrorEnvelope, ErrorType, FieldError, Meta, Page, PageMeta, Pagination,
};
pub use ids::{
    AddressId, AdjustmentId, BusinessId, CustomerId, DiscountId, EventId, IdError, InvoiceId,
    NotificationId, NotificationSettingId, PriceId, ProductId, ReportId, SubscriptionId,
    TransactionId,
};
pub use money::{Amount, CountryCode, CurrencyCode, Money, MoneyError};
pub use notification::{
    Event, EventTypeInfo, EventTypeName, EventTypeNameError, Notification, NotificationSetting,
    NotificationSettingCreate, NotificationSettingKind, NotificationSettingUpdate,
    NotificationStatus, ReplayedNotification, TrafficSource,
};
pub use report::{
    FilterName, FilterOperator, Report, ReportCreate, ReportCsv, ReportFilter, ReportStatus,
    ReportType,
};
pub use subscription::{
    EffectiveFrom, ManagementUrls, ProrationBillingMode, ScheduledChange, ScheduledChangeAction,
    Subscription, SubscriptionCancel, SubscriptionCharge, SubscriptionDiscount,
    SubscriptionDiscountUpdate, SubscriptionItem, SubscriptionItemStatus, SubscriptionItemUpdate,
    SubscriptionPause, SubscriptionResume, SubscriptionStatus, SubscriptionUpdate,
};
pub use transaction::{
    AddressPreview, Checkout, LineItem, Proration, TaxRateUsed, Totals, Transaction,
    TransactionCreate, TransactionDetails, TransactionInvoice, TransactionItem,
    TransactionItemInput, TransactionOrigin, TransactionPreview, TransactionPreviewRequest,
    TransactionPriceInput, TransactionPriceWithProductInput, TransactionProductInput,
    TransactionStatus, TransactionUpdate,
};
