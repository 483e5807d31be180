//! Environment detection and the endpoint set derived from it.

use {crate::request::ValidationType, url::Url};

/// Fixed API origin targeted during local development.
pub const DEV_API_ORIGIN: &str = "http://localhost:8001";

const GENERAL_ENDPOINT: &str = "/api/v1/validate-document";
const SME_ENDPOINT: &str = "/api/v1/validate-sme-document";
const ACADEMIC_ENDPOINT: &str = "/api/v1/validate-academic-document";
const CONFIG_ENDPOINT: &str = "/config";

/// Where the page is running.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Classifies the active host name. Loopback markers and the empty
    /// host are development; anything else is a deployment, where the API
    /// is reachable through the reverse proxy on the page's own origin.
    pub fn detect(hostname: &str) -> Self {
        match hostname {
            "localhost" | "127.0.0.1" | "" => Self::Development,
            _ => Self::Production,
        }
    }

    /// The base origin all endpoint paths are appended to.
    pub fn base_origin(&self, page_origin: &Url) -> Url {
        match self {
            Self::Development => DEV_API_ORIGIN.parse().unwrap(),
            Self::Production => page_origin.clone(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// The validation targets plus the server-config document, derived once
/// from the resolved base origin and immutable for the page session.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Endpoints {
    pub general: Url,
    pub sme: Url,
    pub academic: Url,
    pub config: Url,
}

impl Endpoints {
    pub fn new(base: &Url) -> Self {
        let at = |path: &str| {
            let mut url = base.clone();
            url.set_path(path);
            url
        };
        Self {
            general: at(GENERAL_ENDPOINT),
            sme: at(SME_ENDPOINT),
            academic: at(ACADEMIC_ENDPOINT),
            config: at(CONFIG_ENDPOINT),
        }
    }

    pub fn for_type(&self, validation_type: ValidationType) -> &Url {
        match validation_type {
            ValidationType::General => &self.general,
            ValidationType::Sme => &self.sme,
            ValidationType::Academic => &self.academic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_are_development() {
        assert_eq!(Environment::detect("localhost"), Environment::Development);
        assert_eq!(Environment::detect("127.0.0.1"), Environment::Development);
        assert_eq!(Environment::detect(""), Environment::Development);
        assert_eq!(Environment::detect("app.example.com"), Environment::Production);
        // Detection is exact; a loopback-ish prefix is still a deployment.
        assert_eq!(Environment::detect("localhost.example.com"), Environment::Production);
    }

    #[test]
    fn development_targets_the_fixed_local_origin() {
        let page = "https://app.example.com".parse().unwrap();
        assert_eq!(
            Environment::Development.base_origin(&page).as_str(),
            "http://localhost:8001/"
        );
        assert_eq!(Environment::Production.base_origin(&page), page);
    }

    #[test]
    fn endpoints_are_templated_from_the_base() {
        let base = "https://app.example.com".parse().unwrap();
        let endpoints = Endpoints::new(&base);
        assert_eq!(
            endpoints.sme.as_str(),
            "https://app.example.com/api/v1/validate-sme-document"
        );
        assert_eq!(
            endpoints.academic.as_str(),
            "https://app.example.com/api/v1/validate-academic-document"
        );
        assert_eq!(
            endpoints.general.as_str(),
            "https://app.example.com/api/v1/validate-document"
        );
        assert_eq!(endpoints.config.as_str(), "https://app.example.com/config");
        assert_eq!(endpoints.for_type(ValidationType::Sme), &endpoints.sme);
    }
}
