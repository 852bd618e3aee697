//! Well-known SMTP providers, addressed by a short service name such as `gmail`

/// How the SMTP connection is secured
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Security {
    /// TLS from the first byte (usually port 465)
    Implicit,

    /// Plain connection upgraded with `STARTTLS` (usually port 587)
    StartTls,
}

/// An SMTP relay known by name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WellKnownService {
    /// Canonical service name
    pub name: &'static str,

    /// SMTP host
    pub host: &'static str,

    /// SMTP port
    pub port: u16,

    /// Connection security
    pub security: Security,
}

const fn service(
    name: &'static str,
    host: &'static str,
    port: u16,
    security: Security,
) -> WellKnownService {
    WellKnownService {
        name,
        host,
        port,
        security,
    }
}

const SERVICES: &[WellKnownService] = &[
    service("aol", "smtp.aol.com", 587, Security::StartTls),
    service("fastmail", "smtp.fastmail.com", 465, Security::Implicit),
    service("gmail", "smtp.gmail.com", 465, Security::Implicit),
    service("gmx", "mail.gmx.com", 587, Security::StartTls),
    service("hotmail", "smtp-mail.outlook.com", 587, Security::StartTls),
    service("icloud", "smtp.mail.me.com", 587, Security::StartTls),
    service("mailgun", "smtp.mailgun.org", 465, Security::Implicit),
    service("mail.ru", "smtp.mail.ru", 465, Security::Implicit),
    service("outlook365", "smtp.office365.com", 587, Security::StartTls),
    service("sendgrid", "smtp.sendgrid.net", 587, Security::StartTls),
    service("ses", "email-smtp.us-east-1.amazonaws.com", 465, Security::Implicit),
    service("yahoo", "smtp.mail.yahoo.com", 465, Security::Implicit),
    service("yandex", "smtp.yandex.ru", 465, Security::Implicit),
    service("zoho", "smtp.zoho.com", 465, Security::Implicit),
];

const ALIASES: &[(&str, &str)] = &[
    ("googlemail", "gmail"),
    ("google", "gmail"),
    ("outlook", "hotmail"),
    ("outlook.com", "hotmail"),
    ("live", "hotmail"),
    ("office365", "outlook365"),
    ("me", "icloud"),
    ("mac", "icloud"),
    ("mailru", "mail.ru"),
    ("yahoomail", "yahoo"),
    ("yandexmail", "yandex"),
    ("zohomail", "zoho"),
];

impl WellKnownService {
    /// Looks up a service by name.
    ///
    /// Matching ignores case, surrounding whitespace and any spaces, dashes or
    /// underscores, so `Google Mail`, `google-mail` and `GOOGLEMAIL` all find `gmail`.
    pub fn lookup(name: &str) -> Option<Self> {
        let key = normalize(name);

        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| normalize(alias) == key)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(key.as_str());

        SERVICES
            .iter()
            .find(|service| normalize(service.name) == normalize(canonical))
            .copied()
    }
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
