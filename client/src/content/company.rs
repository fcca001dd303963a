//! Company story, home page sections and contact details.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub phase: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Accent of the background bloom behind the slide.
    pub accent: &'static str,
}

impl HeroSlide {
    /// First word of the title, set on its own line.
    #[must_use]
    pub fn title_lead(&self) -> &'static str {
        self.title.split_once(' ').map_or(self.title, |(lead, _)| lead)
    }

    /// Remainder of the title after the first word, rendered in the gradient.
    #[must_use]
    pub fn title_rest(&self) -> &'static str {
        self.title.split_once(' ').map_or("", |(_, rest)| rest)
    }
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        phase: "01",
        title: "The Soul of Fashion",
        category: "High-Definition Labels",
        description: "Precision-engineered woven labels that bridge the gap between material excellence and brand identity.",
        image: "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=1600",
        accent: "blue",
    },
    HeroSlide {
        phase: "02",
        title: "Tactile Elegance",
        category: "Premium Hang Tags",
        description: "Bespoke cards with deep embossing and localized spot UV textures for an unforgettable brand touch.",
        image: "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=1600",
        accent: "slate",
    },
    HeroSlide {
        phase: "03",
        title: "Bespoke Identity",
        category: "Material Innovation",
        description: "Luxury patches in leather and PU designed for high-performance durability and world-class aesthetics.",
        image: "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=1600",
        accent: "indigo",
    },
];

/// Title plus one line of copy. Used by every card grid on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// Animated headline number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 40, suffix: "+", label: "Employees" },
    Stat { value: 12, suffix: "+", label: "Years of Experience" },
    Stat { value: 100, suffix: "+", label: "Global Clients" },
    Stat { value: 20, suffix: "+", label: "Industry Awards" },
];

pub const OFFERINGS: [&str; 9] = [
    "Hang Tags",
    "Paper Tags",
    "Printer Labels",
    "Packaging",
    "Badges & Patches",
    "Woven Labels",
    "PU Labels",
    "Adhesive Labels",
    "Belly Band & Inserts",
];

/// "Why RKS?" grid on the home page.
pub const WHY_CHOOSE: [Highlight; 5] = [
    Highlight { title: "Best Quality", description: "We use high-grade materials that meet international export standards." },
    Highlight { title: "Customization", description: "End-to-end bespoke designs tailored to your unique brand identity." },
    Highlight { title: "Expertise", description: "12+ years of specialist knowledge in labels and garment packaging." },
    Highlight { title: "Availability", description: "Wide range of materials and finishes always in stock for urgent needs." },
    Highlight {
        title: "Fast Delivery",
        description: "Optimized logistics ensure your branding reaches you on time, every time.",
    },
];

/// "Why RKS Company?" grid shared by the about teaser and the about page.
pub const ADVANTAGES: [Highlight; 4] = [
    Highlight {
        title: "End-to-End Solutions",
        description: "From design consultation to production, we handle every step with professionalism and care.",
    },
    Highlight {
        title: "Attention to Detail",
        description: "Every product we create is a testament to our dedication to quality and precision.",
    },
    Highlight {
        title: "Customer-Centric",
        description: "We collaborate closely with our clients to ensure the final product aligns perfectly with their vision.",
    },
    Highlight {
        title: "Innovation & Sustainability",
        description: "Our focus on eco-friendly materials and innovative designs sets us apart in the industry.",
    },
];

pub const MISSION: Highlight = Highlight {
    title: "Our Mission",
    description: "Our mission is to empower businesses with innovative branding and packaging solutions that build trust and foster loyalty. By leveraging cutting-edge technology, creative designs, and eco-friendly practices, we aim to exceed client expectations.",
};

pub const VISION: Highlight = Highlight {
    title: "Our Vision",
    description: "To become a global leader in branding and packaging by delivering innovative solutions that inspire confidence and enhance product value. We believe every label and every package tells a story.",
};

pub const JOURNEY_STEPS: [Highlight; 6] = [
    Highlight { title: "The Plain Concept", description: "Starting with raw, high-quality material textures." },
    Highlight {
        title: "Precision Woven Label",
        description: "Applying the RKS identity with industrial-grade stitching.",
    },
    Highlight {
        title: "Premium Hang Tag",
        description: "Adding tactile brand signatures with physics-accurate attachment.",
    },
    Highlight { title: "Luxury Rigid Box", description: "Securely encased in engineered protective luxury packaging." },
    Highlight {
        title: "Bespoke Carry Bag",
        description: "The final retail experience prepared for the boutique floor.",
    },
    Highlight { title: "Global Dispatch", description: "Verified quality ready for worldwide corporate logistics." },
];

pub const ABOUT_SLIDES: [&str; 5] = [
    "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=1600",
    "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=1600",
];

pub const CONTACT_SLIDES: [&str; 3] = [
    "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?auto=format&fit=crop&q=80&w=1440",
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&q=80&w=1440",
    "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=1440",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub phones: [&'static str; 2],
    pub email: &'static str,
    pub address: &'static str,
    pub map_embed: &'static str,
}

impl ContactDetails {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the primary number.
    #[must_use]
    pub fn tel(&self) -> String {
        let digits: String = self.phones[0].chars().filter(|c| c.is_ascii_digit() || *c == '+').collect();
        format!("tel:{digits}")
    }
}

pub const CONTACT: ContactDetails = ContactDetails {
    phones: ["+91 90363 33005", "98444 33135"],
    email: "rkscreations10@gmail.com",
    address: "157/B, 9th Cross, 7th Main Rd, 6th Phase, Mahaganapathi Nagar, Bengaluru, KA 560044",
    map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3887.970868154109!2d77.53327637586562!3d12.973719014830177!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bae3d8db374c405%3A0xc3f8e5b4b1049b4d!2sMahaganapathi%20Nagar%2C%20Bengaluru%2C%20Karnataka!5e0!3m2!1sen!2sin!4v1709123456789!5m2!1sen!2sin",
};

/// Trust badges under the contact page form: (label, value).
pub const CONTACT_BADGES: [(&str, &str); 4] = [
    ("Global Export", "40+ Countries"),
    ("Capacity", "10M Units / Mo"),
    ("Quality", "Export Standard"),
    ("Support", "24/7 Dedicated"),
];

pub const FOOTER_BLURB: &str = "Leading manufacturer and exporter of premium labels, hang tags, and branded packaging solutions based in Bengaluru, India.";
pub const COPYRIGHT: &str = "© 2024 RKS Creations. All Rights Reserved.";
