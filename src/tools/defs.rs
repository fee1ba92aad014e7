//! The static tool table.
//!
//! One `ToolSpec` per remote endpoint, grouped by API domain. This is the
//! entire per-endpoint surface: everything else about calling a tool is the
//! generic engine. Parameter order here is the query-string order.

use super::models::*;
use super::spec::{decode_pretty, AuthHeader, ParamKind, ParamSpec, ResponseShape, ToolSpec};

const fn string(name: &'static str, required: bool, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::String,
        required,
        description,
    }
}

const fn number(name: &'static str, required: bool, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Number,
        required,
        description,
    }
}

const fn boolean(name: &'static str, required: bool, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind: ParamKind::Boolean,
        required,
        description,
    }
}

// =============================================================================
// WWW
// =============================================================================

const URL_INFO: ToolSpec = ToolSpec {
    name: "get_url-info",
    description: "URL Info",
    path: "/url-info",
    params: &[
        string("url", true, "The URL to probe"),
        boolean(
            "fetch-content",
            false,
            "If this URL responds with html, text, json or xml then return the response. This option is useful if you want to perform further processing on the URL content (e.g. with the HTML Extract or HTML Clean APIs)",
        ),
        boolean(
            "ignore-certificate-errors",
            false,
            "Ignore any TLS/SSL certificate errors and load the URL anyway",
        ),
        number(
            "timeout",
            false,
            "Timeout in seconds. Give up if still trying to load the URL after this number of seconds",
        ),
        number(
            "retry",
            false,
            "If the request fails for any reason try again this many times",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<UrlInfoResponse>),
};

// =============================================================================
// Security and networking
// =============================================================================

const HOST_REPUTATION: ToolSpec = ToolSpec {
    name: "get_host-reputation",
    description: "Host Reputation",
    path: "/host-reputation",
    params: &[
        string(
            "host",
            true,
            "An IP address, domain name, FQDN or URL. <br>If you supply a domain/URL it will be checked against the URI DNSBL lists",
        ),
        number("list-rating", false, "Only check lists with this rating or better"),
        string(
            "zones",
            false,
            "Only check these DNSBL zones/hosts. Multiple zones can be supplied as comma-separated values",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<HostReputationResponse>),
};

const DOMAIN_LOOKUP: ToolSpec = ToolSpec {
    name: "get_domain-lookup",
    description: "Domain Lookup",
    path: "/domain-lookup",
    params: &[
        string(
            "host",
            true,
            "A domain name, hostname, FQDN, URL, HTML link or email address to lookup",
        ),
        boolean(
            "live",
            false,
            "For domains that we have never seen before then perform various live checks and realtime reconnaissance. <br>NOTE: this option may add additional non-deterministic delay to the request, if you require consistently fast API response times or just want to check our domain blocklists then you can disable this option",
        ),
    ],
    auth: AuthHeader::UserId,
    shape: ResponseShape::Json(decode_pretty::<DomainLookupResponse>),
};

const IP_BLOCKLIST: ToolSpec = ToolSpec {
    name: "get_ip-blocklist",
    description: "IP Blocklist",
    path: "/ip-blocklist",
    params: &[
        string(
            "ip",
            true,
            "An IPv4 or IPv6 address. Accepts standard IP notation (with or without port number), CIDR notation and IPv6 compressed notation. If multiple IPs are passed using comma-separated values the first non-bogon address on the list will be checked",
        ),
        boolean(
            "vpn-lookup",
            false,
            "Include public VPN provider IP addresses. <br><b>NOTE</b>: For more advanced VPN detection including the ability to identify private and stealth VPNs use the <a href=\"https://www.neutrinoapi.com/api/ip-probe/\">IP Probe API</a>",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<IpBlocklistResponse>),
};

const IP_BLOCKLIST_DOWNLOAD: ToolSpec = ToolSpec {
    name: "get_ip-blocklist-download",
    description: "IP Blocklist Download",
    path: "/ip-blocklist-download",
    params: &[
        string("format", false, "The data format. Can be either CSV or TXT"),
        boolean(
            "include-vpn",
            false,
            "Include public VPN provider addresses, this option is only available for Tier 3 or higher accounts. Adds any IPs which are solely listed as VPN providers, IPs that are listed on multiple sensors will still be included without enabling this option. <br><b>WARNING</b>: This adds at least an additional 8 million IP addresses to the download if not using CIDR notation",
        ),
        boolean(
            "cidr",
            false,
            "Output IPs using CIDR notation. This option should be preferred but is off by default for backwards compatibility",
        ),
        boolean(
            "ip6",
            false,
            "Output the IPv6 version of the blocklist, the default is to output IPv4 only. Note that this option enables CIDR notation too as this is the only notation currently supported for IPv6",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::RawString,
};

const IP_PROBE: ToolSpec = ToolSpec {
    name: "get_ip-probe",
    description: "IP Probe",
    path: "/ip-probe",
    params: &[string("ip", true, "An IPv4 or IPv6 address")],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<IpProbeResponse>),
};

const EMAIL_VERIFY: ToolSpec = ToolSpec {
    name: "get_email-verify",
    description: "Email Verify",
    path: "/email-verify",
    params: &[
        string("email", true, "An email address"),
        boolean(
            "fix-typos",
            false,
            "Automatically attempt to fix typos in the address",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<EmailVerifyResponse>),
};

// =============================================================================
// E-commerce
// =============================================================================

const BIN_LOOKUP: ToolSpec = ToolSpec {
    name: "get_bin-lookup",
    description: "BIN Lookup",
    path: "/bin-lookup",
    params: &[
        string(
            "bin-number",
            true,
            "The BIN or IIN number. This is the first 6, 8 or 10 digits of a card number, use 8 (or more) digits for the highest level of accuracy",
        ),
        string(
            "customer-ip",
            false,
            "Pass in the customers IP address and we will return some extra information about them",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<BinLookupResponse>),
};

const BIN_LIST_DOWNLOAD: ToolSpec = ToolSpec {
    name: "get_bin-list-download",
    description: "BIN List Download",
    path: "/bin-list-download",
    params: &[
        boolean(
            "include-iso3",
            false,
            "Include ISO 3-letter country codes and ISO 3-letter currency codes in the data. These will be added to columns 10 and 11 respectively",
        ),
        boolean(
            "include-8digit",
            false,
            "Include 8-digit and higher BIN codes. This option includes all 6-digit BINs and all 8-digit and higher BINs (including some 9, 10 and 11 digit BINs where available)",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::RawString,
};

const CONVERT: ToolSpec = ToolSpec {
    name: "get_convert",
    description: "Convert",
    path: "/convert",
    params: &[
        string("from-value", true, "The value to convert from (e.g. 10.95)"),
        string("from-type", true, "The type of the value to convert from (e.g. USD)"),
        string("to-type", true, "The type to convert to (e.g. EUR)"),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<ConvertResponse>),
};

// =============================================================================
// Data tools
// =============================================================================

const EMAIL_VALIDATE: ToolSpec = ToolSpec {
    name: "get_email-validate",
    description: "Email Validate",
    path: "/email-validate",
    params: &[
        string("email", true, "An email address"),
        boolean(
            "fix-typos",
            false,
            "Automatically attempt to fix typos in the address",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<EmailValidateResponse>),
};

const PHONE_VALIDATE: ToolSpec = ToolSpec {
    name: "get_phone-validate",
    description: "Phone Validate",
    path: "/phone-validate",
    params: &[
        string(
            "number",
            true,
            "A phone number. This can be in international format (E.164) or local format. If passing local format you must also set either the 'country-code' OR 'ip' options as well",
        ),
        string(
            "country-code",
            false,
            "ISO 2-letter country code, assume numbers are based in this country. If not set numbers are assumed to be in international format (with or without the leading + sign)",
        ),
        string(
            "ip",
            false,
            "Pass in a users IP address and we will assume numbers are based in the country of the IP address",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<PhoneValidateResponse>),
};

const UA_LOOKUP: ToolSpec = ToolSpec {
    name: "get_ua-lookup",
    description: "UA Lookup",
    path: "/ua-lookup",
    params: &[
        string(
            "ua",
            true,
            "The user-agent string to lookup. For client hints use the 'UA' header or the JSON data directly from 'navigator.userAgentData.brands' or 'navigator.userAgentData.getHighEntropyValues()'",
        ),
        string(
            "ua-version",
            false,
            "For client hints this corresponds to the 'UA-Full-Version' header or 'uaFullVersion' from NavigatorUAData",
        ),
        string(
            "ua-platform",
            false,
            "For client hints this corresponds to the 'UA-Platform' header or 'platform' from NavigatorUAData",
        ),
        string(
            "ua-platform-version",
            false,
            "For client hints this corresponds to the 'UA-Platform-Version' header or 'platformVersion' from NavigatorUAData",
        ),
        string(
            "ua-mobile",
            false,
            "For client hints this corresponds to the 'UA-Mobile' header or 'mobile' from NavigatorUAData",
        ),
        string(
            "device-model",
            false,
            "For client hints this corresponds to the 'UA-Model' header or 'model' from NavigatorUAData. <br>You can also use this parameter to lookup a device directly by its model name, model code or hardware code, on android you can get the model name from: https://developer.android.com/reference/android/os/Build.html#MODEL",
        ),
        string(
            "device-brand",
            false,
            "This parameter is only used in combination with 'device-model' when doing direct device lookups without any user-agent data. Set this to the brand or manufacturer name, this is required for accurate device detection with ambiguous model names. On android you can get the device brand from: https://developer.android.com/reference/android/os/Build#MANUFACTURER",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<UaLookupResponse>),
};

// =============================================================================
// Telephony
// =============================================================================

const HLR_LOOKUP: ToolSpec = ToolSpec {
    name: "get_hlr-lookup",
    description: "HLR Lookup",
    path: "/hlr-lookup",
    params: &[
        string("number", true, "A phone number"),
        string(
            "country-code",
            false,
            "ISO 2-letter country code, assume numbers are based in this country. <br>If not set numbers are assumed to be in international format (with or without the leading + sign)",
        ),
    ],
    auth: AuthHeader::ApiKey,
    shape: ResponseShape::Json(decode_pretty::<HlrLookupResponse>),
};

const VERIFY_SECURITY_CODE: ToolSpec = ToolSpec {
    name: "get_verify-security-code",
    description: "Verify Security Code",
    path: "/verify-security-code",
    params: &[
        string("security-code", true, "The security code to verify"),
        string(
            "limit-by",
            false,
            "If set then enable additional brute-force protection by limiting the number of attempts by the supplied value. This can be set to any unique identifier you would like to limit by, for example a hash of the users email, phone number or IP address. Requests to this API will be ignored after approximately 10 failed verification attempts",
        ),
    ],
    auth: AuthHeader::UserId,
    shape: ResponseShape::Json(decode_pretty::<VerifySecurityCodeResponse>),
};

// =============================================================================
// Geolocation
// =============================================================================

const GEOCODE_ADDRESS: ToolSpec = ToolSpec {
    name: "get_geocode-address",
    description: "Geocode Address",
    path: "/geocode-address",
    params: &[
        string(
            "address",
            false,
            "The full address, partial address or name of a place to try and locate. Comma separated address components are preferred.",
        ),
        string("house-number", false, "The house/building number to locate"),
        string("street", false, "The street/road name to locate"),
        string("city", false, "The city/town name to locate"),
        string("county", false, "The county/region name to locate"),
        string("state", false, "The state name to locate"),
        string("postal-code", false, "The postal code to locate"),
        string(
            "country-code",
            false,
            "Limit result to this country (the default is no country bias)",
        ),
        string(
            "language-code",
            false,
            "The language to display results in, available languages are: <ul> <li>de, en, es, fr, it, pt, ru, zh</li> </ul>",
        ),
        boolean(
            "fuzzy-search",
            false,
            "If no matches are found for the given address, start performing a recursive fuzzy search until a geolocation is found. This option is recommended for processing user input or implementing auto-complete. We use a combination of approximate string matching and data cleansing to find possible location matches",
        ),
    ],
    auth: AuthHeader::UserId,
    shape: ResponseShape::Json(decode_pretty::<GeocodeAddressResponse>),
};

const GEOCODE_REVERSE: ToolSpec = ToolSpec {
    name: "get_geocode-reverse",
    description: "Geocode Reverse",
    path: "/geocode-reverse",
    params: &[
        string("latitude", true, "The location latitude in decimal degrees format"),
        string("longitude", true, "The location longitude in decimal degrees format"),
        string(
            "language-code",
            false,
            "The language to display results in, available languages are: <ul> <li>de, en, es, fr, it, pt, ru</li> </ul>",
        ),
        string(
            "zoom",
            false,
            "The zoom level to respond with: <br> <ul> <li>address - the most precise address available</li> <li>street - the street level</li> <li>city - the city level</li> <li>state - the state level</li> <li>country - the country level</li> </ul>",
        ),
    ],
    auth: AuthHeader::UserId,
    shape: ResponseShape::Json(decode_pretty::<GeocodeReverseResponse>),
};

const IP_INFO: ToolSpec = ToolSpec {
    name: "get_ip-info",
    description: "IP Info",
    path: "/ip-info",
    params: &[
        string("ip", true, "IPv4 or IPv6 address"),
        boolean(
            "reverse-lookup",
            false,
            "Do a reverse DNS (PTR) lookup. This option can add extra delay to the request so only use it if you need it",
        ),
    ],
    auth: AuthHeader::UserId,
    shape: ResponseShape::Json(decode_pretty::<IpInfoResponse>),
};

/// Every tool the adapter exposes, in catalog order.
pub static TOOLS: &[ToolSpec] = &[
    URL_INFO,
    HOST_REPUTATION,
    DOMAIN_LOOKUP,
    IP_BLOCKLIST,
    IP_BLOCKLIST_DOWNLOAD,
    IP_PROBE,
    EMAIL_VERIFY,
    BIN_LOOKUP,
    BIN_LIST_DOWNLOAD,
    CONVERT,
    EMAIL_VALIDATE,
    PHONE_VALIDATE,
    UA_LOOKUP,
    HLR_LOOKUP,
    VERIFY_SECURITY_CODE,
    GEOCODE_ADDRESS,
    GEOCODE_REVERSE,
    IP_INFO,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_all_endpoints() {
        assert_eq!(TOOLS.len(), 18);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<&str> = TOOLS.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), TOOLS.len());
    }

    #[test]
    fn test_paths_have_leading_slash_and_no_query() {
        for tool in TOOLS {
            assert!(tool.path.starts_with('/'), "{} path", tool.name);
            assert!(!tool.path.contains('?'), "{} path", tool.name);
        }
    }

    #[test]
    fn test_user_id_header_group() {
        let user_id: HashSet<&str> = TOOLS
            .iter()
            .filter(|t| t.auth == AuthHeader::UserId)
            .map(|t| t.name)
            .collect();
        let expected: HashSet<&str> = [
            "get_domain-lookup",
            "get_verify-security-code",
            "get_geocode-address",
            "get_geocode-reverse",
            "get_ip-info",
        ]
        .into_iter()
        .collect();
        assert_eq!(user_id, expected);
    }

    #[test]
    fn test_download_tools_use_raw_string_shape() {
        for name in ["get_ip-blocklist-download", "get_bin-list-download"] {
            let tool = TOOLS.iter().find(|t| t.name == name).unwrap();
            assert!(matches!(tool.shape, ResponseShape::RawString), "{name}");
        }
    }

    #[test]
    fn test_param_names_are_unique_within_each_tool() {
        for tool in TOOLS {
            let names: HashSet<&str> = tool.params.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), tool.params.len(), "{}", tool.name);
        }
    }
}
