//! Expert persona system.
//!
//! Each persona maps to a fixed system instruction that frames the model's
//! behavior for a single request. The mapping is total: any selector value
//! that is not one of the two specialist personas falls through to the
//! general assistant, so resolution can never fail.

/// A selectable expert persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    ItConsultant,
    CareerAdvisor,
    GeneralAssistant,
}

impl Persona {
    /// All personas, in the order the UI presents them.
    pub const ALL: [Persona; 3] = [
        Persona::ItConsultant,
        Persona::CareerAdvisor,
        Persona::GeneralAssistant,
    ];

    /// Resolve a persona from a selector label.
    ///
    /// Accepts the canonical wire labels plus the display-name spellings.
    /// Unrecognized labels resolve to the general assistant.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "consultant" | "it-consultant" | "it consultant" => Persona::ItConsultant,
            "career" | "career-advisor" | "career advisor" => Persona::CareerAdvisor,
            _ => Persona::GeneralAssistant,
        }
    }

    /// Canonical wire label, as sent by the web page and CLI flags.
    pub fn label(&self) -> &'static str {
        match self {
            Persona::ItConsultant => "consultant",
            Persona::CareerAdvisor => "career",
            Persona::GeneralAssistant => "general",
        }
    }

    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::ItConsultant => "IT Consultant",
            Persona::CareerAdvisor => "Career Advisor",
            Persona::GeneralAssistant => "General Assistant",
        }
    }

    /// Fixed system instruction establishing this persona's framing.
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Persona::ItConsultant => {
                "You are an IT consultant. Propose concrete, practical solutions \
                 to the user's technology and IT problems."
            }
            Persona::CareerAdvisor => {
                "You are a career advisor. Give precise advice and a concrete \
                 action plan for the user's career concerns and goals."
            }
            Persona::GeneralAssistant => {
                "You are a helpful assistant. Answer whatever the user asks."
            }
        }
    }
}
