//! Client logos, testimonials and certifications.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientLogo {
    pub name: &'static str,
    pub domain: &'static str,
}

impl ClientLogo {
    #[must_use]
    pub fn logo_url(&self) -> String {
        format!("https://logo.clearbit.com/{}", self.domain)
    }
}

const fn logo(name: &'static str, domain: &'static str) -> ClientLogo {
    ClientLogo { name, domain }
}

/// Brands shown on the home page strip.
pub const HOME_LOGOS: [ClientLogo; 12] = [
    logo("Zara", "zara.com"),
    logo("H&M", "hm.com"),
    logo("Adidas", "adidas.com"),
    logo("Nike", "nike.com"),
    logo("Prada", "prada.com"),
    logo("Gucci", "gucci.com"),
    logo("Levis", "levi.com"),
    logo("Puma", "puma.com"),
    logo("Louis Vuitton", "louisvuitton.com"),
    logo("Tommy Hilfiger", "tommy.com"),
    logo("Calvin Klein", "calvinklein.com"),
    logo("Lacoste", "lacoste.com"),
];

/// Full partner grid on the clients page.
pub const PARTNER_LOGOS: [ClientLogo; 16] = [
    logo("Zara", "zara.com"),
    logo("H&M", "hm.com"),
    logo("Gucci", "gucci.com"),
    logo("Adidas", "adidas.com"),
    logo("Nike", "nike.com"),
    logo("Prada", "prada.com"),
    logo("Levis", "levi.com"),
    logo("Puma", "puma.com"),
    logo("Tommy Hilfiger", "tommy.com"),
    logo("Calvin Klein", "calvinklein.com"),
    logo("Lacoste", "lacoste.com"),
    logo("Louis Vuitton", "louisvuitton.com"),
    logo("Ralph Lauren", "ralphlauren.com"),
    logo("Chanel", "chanel.com"),
    logo("Burberry", "burberry.com"),
    logo("Versace", "versace.com"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub position: &'static str,
    pub brand: &'static str,
    pub text: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Marco Rossi",
        position: "Supply Chain Director",
        brand: "Global Fashion Group",
        text: "RKS Creations has redefined our expectation for label quality. Their attention to HD weaving and rapid sampling has made them our primary partner for international distribution.",
        avatar: "https://i.pravatar.cc/150?u=marco",
    },
    Testimonial {
        name: "Ananya Sharma",
        position: "Creative Lead",
        brand: "Premium Apparel Brand",
        text: "The tactile elegance of their hang tags adds significant value to our luxury garment lines. They don't just print; they understand the soul of a brand.",
        avatar: "https://i.pravatar.cc/150?u=ananya",
    },
    Testimonial {
        name: "David Chen",
        position: "Procurement Head",
        brand: "Sports International",
        text: "Logistics reliability is where RKS truly shines. Their 99% on-time delivery rate is unmatched in the industry, even with complex global exports.",
        avatar: "https://i.pravatar.cc/150?u=david",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub description: &'static str,
}

pub const CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "ISO 9001:2015",
        description: "Quality Management Systems Certification for global standards in production and distribution.",
    },
    Certification {
        title: "GRS Certified",
        description: "Global Recycled Standard acknowledgment for our commitment to sustainable fiber sourcing.",
    },
    Certification {
        title: "OEKO-TEX Standard 100",
        description: "Confidence in textiles – rigorous testing for harmful substances in every label produced.",
    },
    Certification {
        title: "Best Supplier 2023",
        description: "Voted top packaging partner by the South Asian Textile Authority for innovation and scale.",
    },
];
