//! Marketing copy for the landing and sign-up pages.

/// A highlighted platform feature. `glyph` is an emoji rendered in place of
/// an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AthleteStory {
    pub name: &'static str,
    pub sport: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub const PLATFORM_FEATURES: &[Feature] = &[
    Feature {
        glyph: "💬",
        title: "AI Call Tracking",
        description: "Advanced AI monitors and analyzes your training sessions",
    },
    Feature {
        glyph: "💳",
        title: "Wallet Payments",
        description: "Secure wallet system for seamless transactions",
    },
    Feature {
        glyph: "🕒",
        title: "24/7 AI Support",
        description: "Round-the-clock AI assistance for all your queries",
    },
    Feature {
        glyph: "🌍",
        title: "Global Coaching",
        description: "Access world-class coaches from anywhere",
    },
    Feature {
        glyph: "👥",
        title: "Multi-language",
        description: "Support in multiple languages worldwide",
    },
    Feature {
        glyph: "🏆",
        title: "AR/VR Training",
        description: "Immersive training with cutting-edge technology",
    },
];

/// Reasons to sign up, listed beside the auth forms.
pub const MEMBER_BENEFITS: &[Feature] = &[
    Feature {
        glyph: "📅",
        title: "Session Booking",
        description: "Schedule training sessions with world-class coaches",
    },
    Feature {
        glyph: "🏆",
        title: "Progress Tracking",
        description: "Monitor your athletic development and achievements",
    },
    Feature {
        glyph: "💬",
        title: "AI Coaching",
        description: "Get personalized training recommendations",
    },
    Feature {
        glyph: "💳",
        title: "Secure Payments",
        description: "Wallet system for easy session payments",
    },
];

pub const ATHLETE_STORIES: &[AthleteStory] = &[
    AthleteStory {
        name: "Sarah Johnson",
        sport: "Tennis",
        text: "The AI coaching insights transformed my game completely!",
        rating: 5,
    },
    AthleteStory {
        name: "Mike Chen",
        sport: "Basketball",
        text: "Best investment in my athletic journey. Highly recommended!",
        rating: 5,
    },
    AthleteStory {
        name: "Emma Rodriguez",
        sport: "Swimming",
        text: "24/7 support and amazing coaches. Perfect platform!",
        rating: 5,
    },
];

pub const ACADEMY_BADGES: &[&str] =
    &["🏆 500+ Elite Coaches", "🌍 50+ Countries", "⭐ 4.9/5 Rating"];
