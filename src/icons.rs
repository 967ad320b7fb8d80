//! Icon lookup: closed set of icons plus the skill glyph table.

use serde::Serialize;

/// Every icon the portfolio can draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Icon {
    Home,
    Code,
    Layers,
    GraduationCap,
    Heart,
    /// Also the fallback for unknown keys.
    #[default]
    User,
    Gamepad2,
    HeartPulse,
    ShoppingBag,
    Wrench,
    Briefcase,
    Mail,
    Phone,
    MapPin,
    Menu,
    X,
    CheckCircle,
    Sun,
    Moon,
    Github,
}

impl Icon {
    pub const ALL: [Self; 20] = [
        Self::Home,
        Self::Code,
        Self::Layers,
        Self::GraduationCap,
        Self::Heart,
        Self::User,
        Self::Gamepad2,
        Self::HeartPulse,
        Self::ShoppingBag,
        Self::Wrench,
        Self::Briefcase,
        Self::Mail,
        Self::Phone,
        Self::MapPin,
        Self::Menu,
        Self::X,
        Self::CheckCircle,
        Self::Sun,
        Self::Moon,
        Self::Github,
    ];

    /// Resolve an icon key. Unknown keys resolve to [`Icon::default`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|icon| icon.key() == key)
            .unwrap_or_default()
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Code => "Code",
            Self::Layers => "Layers",
            Self::GraduationCap => "GraduationCap",
            Self::Heart => "Heart",
            Self::User => "User",
            Self::Gamepad2 => "Gamepad2",
            Self::HeartPulse => "HeartPulse",
            Self::ShoppingBag => "ShoppingBag",
            Self::Wrench => "Wrench",
            Self::Briefcase => "Briefcase",
            Self::Mail => "Mail",
            Self::Phone => "Phone",
            Self::MapPin => "MapPin",
            Self::Menu => "Menu",
            Self::X => "X",
            Self::CheckCircle => "CheckCircle",
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Github => "Github",
        }
    }

    /// Terminal glyph for this icon.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Code => "💻",
            Self::Layers => "📚",
            Self::GraduationCap => "🎓",
            Self::Heart => "💙",
            Self::User => "👤",
            Self::Gamepad2 => "🎮",
            Self::HeartPulse => "💓",
            Self::ShoppingBag => "🛒",
            Self::Wrench => "🔧",
            Self::Briefcase => "💼",
            Self::Mail => "📧",
            Self::Phone => "📞",
            Self::MapPin => "📍",
            Self::Menu => "☰",
            Self::X => "✕",
            Self::CheckCircle => "✅",
            Self::Sun => "🌞",
            Self::Moon => "🌙",
            Self::Github => "🐙",
        }
    }
}

/// Glyph shown for skills missing from [`skill_glyph`].
pub const DEFAULT_SKILL_GLYPH: &str = "⚙️";

/// Decorative glyph for a skill label, matched exactly.
#[must_use]
pub fn skill_glyph(label: &str) -> &'static str {
    match label {
        // Languages
        "Java" => "☕",
        "MySQL" => "💾",
        "Javascript" => "💻",
        "HTML/CSS" => "🌐",
        "Python" => "🐍",
        // Frameworks
        "Spring (Basics)" => "🌱",
        "JSP" => "📄",
        "Node.JS" => "🟢",
        "Flask" => "⚗️",
        "Tkinter" => "🖼️",
        // Tools
        "Git/ Github" => "🐙",
        "MS Office" => "📊",
        "Bash" => "🐚",
        "Figma" => "🎨",
        "Godot Engine" => "🎮",
        // Core
        "DBMS" => "🗄️",
        "Cybersecurity Concepts" => "🛡️",
        "Networking" => "🔗",
        _ => DEFAULT_SKILL_GLYPH,
    }
}
