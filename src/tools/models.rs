//! Typed response models for the structured tools.
//!
//! Field names follow the remote API's kebab-case JSON. Every struct decodes
//! with `#[serde(default)]` so fields absent from a response fall back to
//! their zero values rather than failing the strict decode; a body whose
//! present fields mismatch in type still fails and triggers the lenient
//! raw-text fallback in the decoder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timezone details attached to location-bearing responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Timezone {
    pub date: String,
    pub id: String,
    pub name: String,
    pub offset: String,
    pub time: String,
    pub abbr: String,
}

/// One matching location from a geocode-address lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Location {
    pub postal_code: String,
    pub country_code: String,
    pub timezone: Timezone,
    pub location_type: String,
    pub latitude: f64,
    pub currency_code: String,
    pub region_code: String,
    pub address_components: Value,
    pub city: String,
    pub location_tags: Vec<String>,
    pub longitude: f64,
    pub state: String,
    pub country: String,
    pub postal_address: String,
    pub country_code3: String,
    pub address: String,
}

/// Details on a specific blocklist sensor that detected a host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BlocklistSensor {
    pub blocklist: String,
    pub description: String,
    pub id: i64,
}

/// One DNSBL check result from a host-reputation lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Blacklist {
    pub list_host: String,
    pub list_name: String,
    pub list_rating: i64,
    pub response_time: i64,
    pub return_code: String,
    pub txt_record: String,
    pub is_listed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UrlInfoResponse {
    pub is_timeout: bool,
    pub load_time: f64,
    pub server_city: String,
    pub server_name: String,
    pub language_code: String,
    pub server_country: String,
    pub url: String,
    pub server_country_code: String,
    pub server_ip: String,
    pub url_port: i64,
    pub content_encoding: String,
    pub content_size: i64,
    // The upstream schema declares this numeric even though the name says
    // "message"; preserved as-is so the strict decode matches the contract.
    pub http_status_message: i64,
    pub query: Value,
    pub title: String,
    pub content_type: String,
    pub http_ok: bool,
    pub server_region: String,
    pub url_path: String,
    pub url_protocol: String,
    pub server_hostname: String,
    pub valid: bool,
    #[serde(rename = "real")]
    pub real_content: bool,
    pub content: String,
    pub http_redirect: bool,
    pub http_status: i64,
    pub is_error: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HostReputationResponse {
    pub list_count: i64,
    pub lists: Vec<Blacklist>,
    pub host: String,
    pub is_listed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DomainLookupResponse {
    pub tld: String,
    pub age: i64,
    pub valid: bool,
    pub blocklists: Vec<String>,
    pub sensors: Vec<BlocklistSensor>,
    pub registrar_id: i64,
    pub rank: i64,
    pub registered_date: String,
    pub mail_provider: String,
    pub dns_provider: String,
    pub fqdn: String,
    pub tld_cc: String,
    pub is_malicious: bool,
    pub registrar_name: String,
    pub domain: String,
    pub is_opennic: bool,
    pub is_subdomain: bool,
    pub is_pending: bool,
    pub is_adult: bool,
    pub is_gov: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IpBlocklistResponse {
    pub is_proxy: bool,
    pub cidr: String,
    pub is_spam_bot: bool,
    pub ip: String,
    pub is_dshield: bool,
    pub is_hijacked: bool,
    pub is_exploit_bot: bool,
    pub is_listed: bool,
    pub is_spyware: bool,
    pub last_seen: i64,
    pub list_count: i64,
    pub is_tor: bool,
    pub sensors: Vec<BlocklistSensor>,
    pub blocklists: Vec<String>,
    pub is_bot: bool,
    pub is_malware: bool,
    pub is_spider: bool,
    pub is_vpn: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IpInfoResponse {
    pub country_code3: String,
    pub currency_code: String,
    pub region_code: String,
    pub continent_code: String,
    pub is_v6: bool,
    pub timezone: Timezone,
    pub host_domain: String,
    pub latitude: f64,
    pub is_bogon: bool,
    pub longitude: f64,
    pub region: String,
    pub is_v4_mapped: bool,
    pub country: String,
    pub hostname: String,
    pub ip: String,
    pub country_code: String,
    pub valid: bool,
    pub city: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct IpProbeResponse {
    pub city: String,
    pub valid: bool,
    pub as_country_code3: String,
    pub provider_type: String,
    pub asn: String,
    pub ip: String,
    pub as_cidr: String,
    pub region: String,
    pub region_code: String,
    pub is_hosting: bool,
    pub continent_code: String,
    pub provider_domain: String,
    pub as_country_code: String,
    pub as_description: String,
    pub host_domain: String,
    pub vpn_domain: String,
    pub is_bogon: bool,
    pub hostname: String,
    pub is_v4_mapped: bool,
    pub provider_website: String,
    pub as_age: i64,
    pub country_code: String,
    pub is_proxy: bool,
    pub country: String,
    pub provider_description: String,
    pub is_isp: bool,
    pub country_code3: String,
    pub is_v6: bool,
    pub is_vpn: bool,
    pub currency_code: String,
    pub as_domains: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeocodeAddressResponse {
    pub locations: Vec<Location>,
    pub found: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeocodeReverseResponse {
    pub currency_code: String,
    pub latitude: f64,
    pub location_type: String,
    pub region_code: String,
    pub country: String,
    pub postal_code: String,
    pub state: String,
    pub address_components: Value,
    pub city: String,
    pub location_tags: Vec<String>,
    pub postal_address: String,
    pub timezone: Value,
    pub longitude: f64,
    pub found: bool,
    pub country_code: String,
    pub address: String,
    pub country_code3: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UaLookupResponse {
    pub device_pixel_ratio: f64,
    pub device_width_px: f64,
    pub device_model: String,
    pub os_family: String,
    pub os_version_major: String,
    pub browser_engine: String,
    pub device_resolution: String,
    pub name: String,
    pub ua: String,
    pub device_price: f64,
    pub is_webview: bool,
    pub os: String,
    pub version_major: String,
    pub browser_release: String,
    pub version: String,
    pub os_version: String,
    #[serde(rename = "type")]
    pub ua_type: String,
    pub device_release: String,
    pub device_height_px: f64,
    pub device_model_code: String,
    pub device_ppi: f64,
    pub is_mobile: bool,
    pub device_brand: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EmailValidateResponse {
    pub email: String,
    pub typos_fixed: bool,
    pub is_freemail: bool,
    pub is_personal: bool,
    pub domain: String,
    pub domain_error: bool,
    pub is_disposable: bool,
    pub syntax_error: bool,
    pub valid: bool,
    pub provider: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EmailVerifyResponse {
    pub verified: bool,
    pub is_deferred: bool,
    pub provider: String,
    pub is_personal: bool,
    pub syntax_error: bool,
    pub smtp_status: String,
    pub is_disposable: bool,
    pub typos_fixed: bool,
    pub domain_error: bool,
    pub is_catch_all: bool,
    pub is_freemail: bool,
    pub valid: bool,
    pub domain: String,
    pub smtp_response: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PhoneValidateResponse {
    pub currency_code: String,
    pub is_mobile: bool,
    pub valid: bool,
    pub international_calling_code: String,
    pub international_number: String,
    pub local_number: String,
    #[serde(rename = "type")]
    pub number_type: String,
    pub country_code: String,
    pub country_code3: String,
    pub location: String,
    pub prefix_network: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HlrLookupResponse {
    pub number_type: String,
    pub roaming_country_code: String,
    pub country_code: String,
    pub country_code3: String,
    pub is_mobile: bool,
    pub local_number: String,
    pub msc: String,
    pub msin: String,
    pub hlr_valid: bool,
    pub international_number: String,
    pub mnc: String,
    pub international_calling_code: String,
    pub number_valid: bool,
    pub ported_network: String,
    pub imsi: String,
    pub is_ported: bool,
    pub origin_network: String,
    pub mcc: String,
    pub is_roaming: bool,
    pub currency_code: String,
    pub hlr_status: String,
    pub current_network: String,
    pub country: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BinLookupResponse {
    pub is_prepaid: bool,
    pub issuer_website: String,
    pub card_type: String,
    pub ip_matches_bin: bool,
    pub ip_city: String,
    pub currency_code: String,
    pub country_code3: String,
    pub ip_country_code3: String,
    pub ip_blocklists: Vec<String>,
    pub country: String,
    pub country_code: String,
    pub issuer_phone: String,
    pub card_category: String,
    pub ip_blocklisted: bool,
    pub is_commercial: bool,
    pub ip_country: String,
    pub ip_country_code: String,
    pub ip_region: String,
    pub valid: bool,
    pub issuer: String,
    pub card_brand: String,
    pub bin_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ConvertResponse {
    pub result: String,
    pub result_float: f64,
    pub to_type: String,
    pub valid: bool,
    pub from_type: String,
    pub from_value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct VerifySecurityCodeResponse {
    pub verified: bool,
}
