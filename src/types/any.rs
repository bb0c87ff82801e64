use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::AddressRecord;
use super::auth::AuthRecord;
use super::card::CardRecord;
use super::cookie::CookieRecord;
use super::dns::DnsEntry;
use super::email::EmailRecord;
use super::license::LicenseRecord;
use super::parsed::ParsedPageResult;
use super::phone::PhoneRecord;
use super::proxy::ProxyEndpoint;
use super::record::{Category, FieldValue, Record, Searchable};

/// A record of any category, for mixed collections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum AnyRecord {
    Email(EmailRecord),
    Cookie(CookieRecord),
    Phone(PhoneRecord),
    AuthCredential(AuthRecord),
    Address(AddressRecord),
    PaymentCard(CardRecord),
    License(LicenseRecord),
    Proxy(ProxyEndpoint),
    DnsEntry(DnsEntry),
    ParsedPageResult(ParsedPageResult),
}

macro_rules! dispatch {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            AnyRecord::Email($r) => $body,
            AnyRecord::Cookie($r) => $body,
            AnyRecord::Phone($r) => $body,
            AnyRecord::AuthCredential($r) => $body,
            AnyRecord::Address($r) => $body,
            AnyRecord::PaymentCard($r) => $body,
            AnyRecord::License($r) => $body,
            AnyRecord::Proxy($r) => $body,
            AnyRecord::DnsEntry($r) => $body,
            AnyRecord::ParsedPageResult($r) => $body,
        }
    };
}

impl AnyRecord {
    pub fn category(&self) -> Category {
        match self {
            AnyRecord::Email(_) => Category::Email,
            AnyRecord::Cookie(_) => Category::Cookie,
            AnyRecord::Phone(_) => Category::Phone,
            AnyRecord::AuthCredential(_) => Category::AuthCredential,
            AnyRecord::Address(_) => Category::Address,
            AnyRecord::PaymentCard(_) => Category::PaymentCard,
            AnyRecord::License(_) => Category::License,
            AnyRecord::Proxy(_) => Category::Proxy,
            AnyRecord::DnsEntry(_) => Category::DnsEntry,
            AnyRecord::ParsedPageResult(_) => Category::ParsedPageResult,
        }
    }

    pub fn id(&self) -> &str {
        dispatch!(self, r => r.id())
    }

    pub fn source(&self) -> &str {
        dispatch!(self, r => r.source())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        dispatch!(self, r => r.created_at())
    }
}

impl Searchable for AnyRecord {
    fn field(&self, name: &str) -> Option<FieldValue> {
        if name == "category" {
            return Some(self.category().as_str().into());
        }
        dispatch!(self, r => r.field(name))
    }

    fn searchable_fields(&self) -> &'static [&'static str] {
        dispatch!(self, r => r.searchable_fields())
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for AnyRecord {
                fn from(record: $ty) -> Self {
                    AnyRecord::$variant(record)
                }
            }
        )*
    };
}

impl_from!(
    Email(EmailRecord),
    Cookie(CookieRecord),
    Phone(PhoneRecord),
    AuthCredential(AuthRecord),
    Address(AddressRecord),
    PaymentCard(CardRecord),
    License(LicenseRecord),
    Proxy(ProxyEndpoint),
    DnsEntry(DnsEntry),
    ParsedPageResult(ParsedPageResult),
);
