//! User-visible strings as a typed catalog.
//!
//! Each [`Message`] variant is one translation key; dynamic content travels
//! as named fields instead of string placeholders, so a missing parameter is
//! a compile error rather than a blank in the UI.

use std::fmt;

use crate::order::OrderId;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    ZhHans,
}

impl Locale {
    /// Resolve a BCP 47 tag (`en-AU`, `zh-CN`, `zh-Hans`...) on its primary subtag.
    /// Anything unrecognised falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Locale::ZhHans,
            _ => Locale::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHans => "zh-Hans",
        }
    }
}

/// Every string the orders view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Title,
    Back,
    /// Placeholder while a provider name is unresolved.
    ProviderLoading,
    ColumnRide,
    ColumnSchedule,
    ColumnFare,
    ColumnStatus,
    ColumnAction,
    StatusConfirmed,
    StatusCancelled,
    CancelAction,
    DeleteAction,
    EmptyState,
    BookRide,
    FetchOrdersFailed,
    OrderCancelled { order_id: OrderId },
    CancelFailed { order_id: OrderId },
    OrderDeleted { order_id: OrderId },
    DeleteFailed,
    NetworkError,
}

impl Message {
    pub fn render(self, locale: Locale) -> String {
        match locale {
            Locale::En => self.render_en(),
            Locale::ZhHans => self.render_zh_hans(),
        }
    }

    fn render_en(self) -> String {
        match self {
            Message::Title => "My ride bookings".into(),
            Message::Back => "Back".into(),
            Message::ProviderLoading => "Loading...".into(),
            Message::ColumnRide => "Provider / Route".into(),
            Message::ColumnSchedule => "Date & time".into(),
            Message::ColumnFare => "Estimated fare".into(),
            Message::ColumnStatus => "Status".into(),
            Message::ColumnAction => "Action".into(),
            Message::StatusConfirmed => "Confirmed".into(),
            Message::StatusCancelled => "Cancelled".into(),
            Message::CancelAction => "Cancel".into(),
            Message::DeleteAction => "Delete".into(),
            Message::EmptyState => "You have no ride bookings yet.".into(),
            Message::BookRide => "Book a ride".into(),
            Message::FetchOrdersFailed => "Failed to get orders".into(),
            Message::OrderCancelled { order_id } => format!("Order #{order_id} has been cancelled"),
            Message::CancelFailed { order_id } => format!("Failed to cancel order #{order_id}"),
            Message::OrderDeleted { order_id } => format!("Order #{order_id} has been deleted"),
            Message::DeleteFailed => "Failed to delete order".into(),
            Message::NetworkError => "Network error, please try again later".into(),
        }
    }

    fn render_zh_hans(self) -> String {
        match self {
            Message::Title => "我的乘车预订".into(),
            Message::Back => "返回".into(),
            Message::ProviderLoading => "加载中...".into(),
            Message::ColumnRide => "服务商 / 路线".into(),
            Message::ColumnSchedule => "日期和时间".into(),
            Message::ColumnFare => "预估费用".into(),
            Message::ColumnStatus => "状态".into(),
            Message::ColumnAction => "操作".into(),
            Message::StatusConfirmed => "已确认".into(),
            Message::StatusCancelled => "已取消".into(),
            Message::CancelAction => "取消".into(),
            Message::DeleteAction => "删除".into(),
            Message::EmptyState => "您还没有乘车预订。".into(),
            Message::BookRide => "预订乘车".into(),
            Message::FetchOrdersFailed => "获取订单失败".into(),
            Message::OrderCancelled { order_id } => format!("订单 #{order_id} 已取消"),
            Message::CancelFailed { order_id } => format!("取消订单 #{order_id} 失败"),
            Message::OrderDeleted { order_id } => format!("订单 #{order_id} 已删除"),
            Message::DeleteFailed => "删除订单失败".into(),
            Message::NetworkError => "网络错误，请稍后重试".into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::default()))
    }
}
