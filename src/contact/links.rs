use crate::models::Agent;
use serde::Serialize;

/// Call, text and chat links built from an agent's phone number
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DeepLinks {
    pub call: String,
    pub sms: String,
    pub whatsapp: String,
}

impl DeepLinks {
    pub fn for_agent(agent: &Agent) -> Self {
        Self::for_phone(&agent.phone)
    }

    pub fn for_phone(phone: &str) -> Self {
        let phone = phone.trim();
        Self {
            call: format!("tel:{}", phone),
            sms: format!("sms:{}", phone),
            whatsapp: format!("https://wa.me/{}", phone.replace('+', "")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_links_from_international_number() {
        let links = DeepLinks::for_phone("+251911234567");
        assert_eq!(links.call, "tel:+251911234567");
        assert_eq!(links.sms, "sms:+251911234567");
        assert_eq!(links.whatsapp, "https://wa.me/251911234567");
    }
}
