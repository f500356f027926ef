use std::fmt;

/// A plain organization record: name, physical address and contact email.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Organization {
    name: String,
    address: String,
    contact_email: String,
}

impl Organization {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            contact_email: contact_email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }
}

impl fmt::Debug for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Organization(name={}, address={}, contact_email={})",
            self.name, self.address, self.contact_email
        )
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} located at {}. Contact: {}",
            self.name, self.address, self.contact_email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Organization {
        Organization::new(
            "Tech Solutions",
            "123 Tech Lane, Silicon Valley, CA",
            "contact@techsolutions.com",
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            "Tech Solutions located at 123 Tech Lane, Silicon Valley, CA. Contact: contact@techsolutions.com"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", sample()),
            "Organization(name=Tech Solutions, address=123 Tech Lane, Silicon Valley, CA, contact_email=contact@techsolutions.com)"
        );
    }

    #[test]
    fn test_accessors() {
        let org = sample();
        assert_eq!(org.name(), "Tech Solutions");
        assert_eq!(org.contact_email(), "contact@techsolutions.com");
        assert_eq!(org, org.clone());
    }
}
