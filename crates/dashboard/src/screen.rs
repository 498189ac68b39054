use core::str::FromStr;

use crate::error::DashboardError;

/// Screens offered by the action selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    #[default]
    ViewInventory,
    RestockSuggestions,
    Analytics,
    ChatWithAssistant,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::ViewInventory,
        Screen::RestockSuggestions,
        Screen::Analytics,
        Screen::ChatWithAssistant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::ViewInventory => "view-inventory",
            Screen::RestockSuggestions => "restock",
            Screen::Analytics => "analytics",
            Screen::ChatWithAssistant => "chat",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::ViewInventory => "📋 Inventory List",
            Screen::RestockSuggestions => "🚚 Restock Suggestions",
            Screen::Analytics => "📊 Inventory Analytics",
            Screen::ChatWithAssistant => "🧠 Chat with Inventory Assistant",
        }
    }
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view-inventory" | "view" | "inventory" => Ok(Screen::ViewInventory),
            "restock" | "restock-suggestions" => Ok(Screen::RestockSuggestions),
            "analytics" => Ok(Screen::Analytics),
            "chat" | "assistant" => Ok(Screen::ChatWithAssistant),
            _ => Err(DashboardError::UnknownScreen(s.to_string())),
        }
    }
}
