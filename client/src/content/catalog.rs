//! Product catalog.
//!
//! Every product has exactly six feature cards, one per [`FeatureKind`], in
//! the same order, so the detail page can lay them out on a fixed grid.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Icon family of a feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Customizable,
    HighResolution,
    Durable,
    CostEffective,
    EcoFriendly,
    QuickTurnaround,
}

impl FeatureKind {
    /// Glyph shown in the feature icon tile.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureKind::Customizable => "✎",
            FeatureKind::HighResolution => "◎",
            FeatureKind::Durable => "⛨",
            FeatureKind::CostEffective => "₹",
            FeatureKind::EcoFriendly => "❦",
            FeatureKind::QuickTurnaround => "⏱",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductFeature {
    pub kind: FeatureKind,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub secondary_tagline: &'static str,
    pub image: &'static str,
    pub gallery: &'static [&'static str],
    /// One-paragraph pitch used on cards.
    pub summary: &'static str,
    /// Long-form copy used on the detail page.
    pub description: &'static str,
    pub materials: &'static [&'static str],
    pub finishing: &'static [&'static str],
    pub customization: &'static [&'static str],
    pub applications: &'static [&'static str],
    pub features: [ProductFeature; 6],
}

/// Home page teaser card pointing at a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductTeaser {
    pub product_id: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

/// Look a product up by id.
#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

pub const TEASERS: [ProductTeaser; 3] = [
    ProductTeaser {
        product_id: "hangtags",
        title: "Luxury Hang Tags",
        tag: "Print Craft",
        description: "Heavyweight cards with premium foil, embossing, and spot-UV finishes.",
        image: "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=800",
    },
    ProductTeaser {
        product_id: "woven",
        title: "HD Woven Labels",
        tag: "Textile",
        description: "High-definition weaving for extreme detail and soft touch identity.",
        image: "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=800",
    },
    ProductTeaser {
        product_id: "pu-labels",
        title: "PU & Synthetic Leather",
        tag: "Material",
        description: "Custom debossed patches for denim and premium outer-wear brands.",
        image: "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=800",
    },
];

pub static PRODUCTS: [Product; 8] = [
    Product {
        id: "hangtags",
        title: "Hangtags / Paper Tags",
        tagline: "Elevate Your Brand with Premium Hangtags and Paper Tags",
        secondary_tagline: "Crafted for Elegance, Designed to Impress",
        image: "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "Our premium hangtags are engineered to define luxury. Using heavyweight FSC-certified papers, we create tactile experiences that bridge the gap between garments and brand stories.",
        description: "At RKS Creations, we specialize in creating high-quality paper tags that blend functionality with aesthetic appeal. From chic retail tags to durable tags for industrial use, our designs enhance your brand’s identity while providing essential product information. Made with premium materials and attention to detail, our paper tags cater to various industries, including fashion, accessories, and home goods. Elevate your products with paper tags that leave a lasting impression on your customers.",
        materials: &["High-GSM Ivory Board", "Textured Kraft Paper", "Eco-friendly GRS Recycled Paper", "Vellum Translucents"],
        finishing: &["Gold & Silver Foil Stamping", "Deep Embossing/Debossing", "High-Gloss Spot UV", "Soft-touch Velvet Lamination"],
        customization: &["Custom Die-cutting", "Eyelet Reinforcement", "Bespoke Strings & Seals", "Variable Data Printing"],
        applications: &["Luxury Apparel", "Premium Footwear", "High-end Accessories", "Designer Boutique Packaging"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Tailor your paper tags to reflect your brand’s unique identity with bespoke shapes, sizes, and finishes." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Experience sharp, vibrant prints that bring your designs to life and make your tags stand out." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Crafted from top-quality paper, our tags are designed to withstand wear and tear, ensuring longevity." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Get premium paper tags at competitive prices without compromising on quality." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Choose from sustainable materials and processes to align with your brand's commitment to the environment." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "We value your time! Enjoy fast production and on-time delivery for all your orders." },
        ],
    },
    Product {
        id: "woven",
        title: "Woven Labels",
        tagline: "Woven Labels That Showcase Quality and Detail",
        secondary_tagline: "Precision Woven, Perfectly Crafted",
        image: "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1589939705384-5185138a04ad?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "High-definition woven labels crafted with Swiss-precision. We specialize in damask, satin, and taffeta weaves that maintain sharpness and skin-soft comfort even after 100+ washes.",
        description: "RKS Creations specializes in high-quality woven labels that combine exceptional durability with intricate detailing. Ideal for apparel, accessories, and home goods, our woven labels offer a premium look and feel, ensuring your brand’s logo and information are displayed with clarity and elegance. Made from superior threads, they are designed to last, withstanding multiple washes and everyday wear.",
        materials: &["Fine Damask Thread", "Premium Satin Silk", "Recycled Polyester Yarn", "Organic Cotton Fibers"],
        finishing: &["Ultrasonic Soft Edge Cut", "Heat-seal Backing", "Pressure-sensitive Adhesive", "Starch-stiffened Finish"],
        customization: &["Center Fold / End Fold", "Loop Fold", "Mitre Fold", "Laser-cut Complex Shapes"],
        applications: &["Outerwear Branding", "Main Identity Labels", "Size & Composition Tabs", "Designer Collectibles"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Tailored to reflect your brand’s unique identity and messaging." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Sharp, clear, and vibrant graphics for a professional finish." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Resistant to fading, moisture, and wear, ensuring long-lasting performance." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Affordable pricing without sacrificing the quality or precision of your labels." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Sustainable materials and eco-friendly printing for conscious brands." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Efficient production times to meet your deadlines without compromising quality." },
        ],
    },
    Product {
        id: "printed",
        title: "Printed Labels",
        tagline: "High-Quality Printed Labels for Every Need",
        secondary_tagline: "Precision, Durability, and Customization for Your Brand",
        image: "https://images.unsplash.com/photo-1589939705384-5185138a04ad?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "Exceptional clarity for care instructions and branding. Our rotary and screen printing technology ensures wash-fastness and vibrant color reproduction on all materials.",
        description: "We specialize in premium printed labels for various industries, crafted with precision for exceptional clarity, vibrant colors, and durability. We offer cotton, decorative, embroidered, and custom die-cut labels in diverse shapes, adding beauty and boosting brand value. At RKS, every print is a fusion of technology and art, designed to endure and inspire.",
        materials: &["Premium Polyester Satin", "Natural Cotton Twill", "Nylon Taffeta", "Sustainable Tyvek®"],
        finishing: &["Double-Sided Printing", "Neon & Metallic Inks", "Cold-cut Precision Edges", "Bio-enzyme Wash Treatment"],
        customization: &["Bespoke Die-cut Shapes", "Variable Data Printing", "Thermal Transfer Compatibility", "Multi-color Screen Prints"],
        applications: &["Brand Neck Tapes", "Care & Content Instruction", "Side Seam Identification", "Children's Apparel Labels"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Tailored to reflect your brand’s unique identity and messaging." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Sharp, clear, and vibrant graphics for a professional finish." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Resistant to fading, moisture, and wear, ensuring long-lasting performance." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Affordable pricing without sacrificing the quality or precision of your labels." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Sustainable materials and eco-friendly printing for conscious brands." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Efficient production times to meet your deadlines without compromising quality." },
        ],
    },
    Product {
        id: "pu-labels",
        title: "PU & Synthetic Labels",
        tagline: "PU Labels That Define Durability and Style",
        secondary_tagline: "Where Functionality Meets Fashion",
        image: "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1589939705384-5185138a04ad?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "The rugged alternative for premium outerwear. Our custom-engineered PU and synthetic leathers provide the look of heritage material with modern durability.",
        description: "RKS Creations offers premium PU labels that combine durability with a sophisticated look, perfect for elevating your brand's image. Whether for apparel, accessories, or home textiles, our PU labels are crafted with precision to deliver a smooth finish and long-lasting performance. Resistant to wear and tear, these labels are ideal for showcasing your logo or product details with clarity and style. Choose RKS Creations for PU labels that stand the test of time while adding a touch of elegance to your products.",
        materials: &["Vegan PU Leather", "Synthetic Microfiber", "Suede-touch Polymers", "Recycled Leather Scraps"],
        finishing: &["Deep Heat Debossing", "Color-matched Infill", "Distressed Vintage Look", "Laser-etched Details"],
        customization: &["Stitch-ready Channels", "Adhesive Backing", "Perforated Patterns", "Multi-layer Construction"],
        applications: &["Denim Back-patches", "Luxury Handbags", "Industrial Apparel", "Footwear Accents"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Create PU labels that perfectly represent your brand with tailored shapes, sizes, and finishes." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Enjoy crisp and detailed designs that make your logo or text stand out beautifully." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Our PU labels are made to last, offering excellent resistance to wear, washing, and fading." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Get exceptional quality PU labels at prices that fit your budget." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Opt for sustainable PU materials to align with your brand’s environmental goals." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Fast production and reliable delivery ensure you meet your timelines with ease." },
        ],
    },
    Product {
        id: "packaging",
        title: "Packaging & Garment Box",
        tagline: "Packaging Solutions That Elevate Your Brand",
        secondary_tagline: "Innovative, Protective, and Stunningly Designed",
        image: "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "Transform the point of delivery into a ritual. Our rigid boxes and custom bags are designed for high structural integrity and world-class aesthetics.",
        description: "At RKS Creations, we provide innovative and reliable packaging solutions that not only protect your products but also enhance your brand’s presentation. Whether it’s for retail, e-commerce, or industrial products, our packaging is designed to stand out with custom prints, premium materials, and practical functionality. We understand the importance of both visual appeal and durability, ensuring your products arrive safely and make a lasting impression.",
        materials: &["Rigid Grey Board", "Art Paper Overlays", "Sustainable Corrugated Fiber", "Silk & Ribbon Details"],
        finishing: &["Magnetic Closures", "Gold/Silver Edge Foil", "Internal Velvet Flocking", "Matte/Gloss Finish"],
        customization: &["Bespoke Structural Design", "Custom Molded Inserts", "Branded Tissue Paper", "Wax Seal Accents"],
        applications: &["Luxury Gifting", "Corporate Onboarding", "Boutique Retail", "E-commerce Masterboxes"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Tailored to reflect your brand’s unique identity and messaging." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Sharp, clear, and vibrant graphics for a professional finish." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Resistant to fading, moisture, and wear, ensuring long-lasting performance." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Affordable pricing without sacrificing the quality or precision of your labels." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Sustainable materials and eco-friendly printing for conscious brands." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Efficient production times to meet your deadlines without compromising quality." },
        ],
    },
    Product {
        id: "adhesive",
        title: "Adhesive Labels",
        tagline: "Adhesive Labels That Stick with Style",
        secondary_tagline: "Reliable, Versatile, and Effortlessly Effective",
        image: "https://images.unsplash.com/photo-1603513335134-86d4d42065ec?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1589939705384-5185138a04ad?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "Precision-cut branding that sticks. From barcodes to premium holographic seals, our adhesives are tested for extreme temperature and surface durability.",
        description: "RKS Creations offers premium self-adhesive labels designed for convenience, versatility, and long-lasting adhesion. Whether for packaging, retail, or product labeling, our self-adhesive labels ensure a secure fit on various surfaces, providing a clean and professional look. With high-quality materials and vibrant prints, they make your brand’s information easy to read and visually appealing. Perfect for businesses that value efficiency, our self-adhesive labels offer quick application without compromising on quality.",
        materials: &["Thermal Chrome Paper", "Transparent PE/BOPP", "Holographic Anti-counterfeit Foil", "Silver/Gold Polyester"],
        finishing: &["Water-resistant Varnish", "UV-protection Coating", "Easy-peel Adhesive", "Industrial-strength Glue"],
        customization: &["Circular & Square Die-cuts", "Roll or Sheet Format", "Security Tamper-evident Cuts", "Branded Backing Paper"],
        applications: &["Inventory Control", "Security Seals", "Promotional Branding", "Product Specification Tabs"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Tailored to reflect your brand’s unique identity and messaging." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Sharp, clear, and vibrant graphics for a professional finish." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Resistant to fading, moisture, and wear, ensuring long-lasting performance." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Affordable pricing without sacrificing the quality or precision of your labels." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Sustainable materials and eco-friendly printing for conscious brands." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Efficient production times to meet your deadlines without compromising quality." },
        ],
    },
    Product {
        id: "badges",
        title: "Badges & Patches",
        tagline: "Badges & Patches That Embody Craftsmanship and Style",
        secondary_tagline: "Expertly Designed, Perfectly Made",
        image: "https://images.unsplash.com/photo-1596464716127-f2a82984de30?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1620799140408-edc6dcb6d633?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1544441893-675973e31985?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "Three-dimensional identity for your garments. We create high-density embroidery, PVC, and silicone patches that command attention.",
        description: "RKS Creations specializes in premium badges and patches that blend exceptional durability with intricate craftsmanship. Ideal for uniforms, apparel, bags, and accessories, our badges and patches provide a professional and stylish touch to represent your brand or organization. Made from high-quality materials, they are designed to last, resisting wear and tear while maintaining their vibrant colors and detailed designs.",
        materials: &["Silicon/Rubber Polymers", "Embroidered Textile Bases", "3D Soft PVC", "Felt & Chenille"],
        finishing: &["Merrowed Edges", "Velcro Backing", "Iron-on Adhesive", "Magnetic Attachments"],
        customization: &["Multi-color Layering", "Glow-in-the-dark Pigments", "Photographic Print Hybrid", "Reflective Finish"],
        applications: &["Streetwear Graphics", "Military & Uniform Badges", "Sports Team Identity", "Limited Edition Caps"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Create badges and patches tailored to your unique style, with endless options for colors, shapes, and sizes." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Experience crisp, vibrant designs with our state-of-the-art printing technology for unmatched clarity." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Crafted with premium materials to ensure long-lasting wear and tear resistance." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Get exceptional quality without exceeding your budget, perfect for businesses of all sizes." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Choose sustainable materials and processes that are kind to the planet." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Enjoy fast production and delivery to meet tight deadlines without compromising quality." },
        ],
    },
    Product {
        id: "belly-bands",
        title: "Belly Band & Inserts",
        tagline: "Belly Bands & Inserts That Elevate Presentation",
        secondary_tagline: "Meticulously Designed, Perfectly Finished",
        image: "https://images.unsplash.com/photo-1586075010633-244519635c17?auto=format&fit=crop&q=80&w=1200",
        gallery: &[
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1605518216938-7c31b7b14ad0?auto=format&fit=crop&q=80&w=600",
            "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=600",
        ],
        summary: "The elegant finish for packaged garments. Our belly bands and story cards provide essential space for brand narratives and product specifications.",
        description: "RKS Creations specializes in premium belly bands and inserts that combine exceptional durability with refined detailing. Ideal for packaging apparel, accessories, and gift items, our belly bands and inserts offer a sophisticated and professional look, ensuring your brand’s identity and messaging stand out. Made from high-quality materials, they are designed to endure handling while maintaining their shape and elegance, adding value to your products.",
        materials: &["Linen Textured Paper", "Recycled Cardstock", "Semi-transparent Vellum", "Synthetic Silk Ribbon"],
        finishing: &["Spot UV Accents", "Custom Creasing", "Die-cut Windows", "Eco-friendly Vegetable Inks"],
        customization: &["Variable Widths", "Adhesive Tape Integration", "QR Code Printing", "Hand-calligraphy Options"],
        applications: &["Shirt & Linen Packaging", "Box Wrap Branding", "Product Information Leaflets", "Subscription Box Inserts"],
        features: [
            ProductFeature { kind: FeatureKind::Customizable, title: "Customizable Designs", description: "Tailor belly bands and inserts to match your brand with endless design possibilities, including sizes, colors, and finishes." },
            ProductFeature { kind: FeatureKind::HighResolution, title: "High-Resolution Printing", description: "Showcase sharp, vibrant designs and text with our advanced printing techniques for a premium look." },
            ProductFeature { kind: FeatureKind::Durable, title: "Durable Materials", description: "Crafted with sturdy materials to maintain their form and appeal during handling and storage." },
            ProductFeature { kind: FeatureKind::CostEffective, title: "Cost-Effective", description: "Achieve high-quality packaging solutions without exceeding your budget." },
            ProductFeature { kind: FeatureKind::EcoFriendly, title: "Eco-Friendly Options", description: "Opt for sustainable materials to create packaging that’s stylish and environmentally responsible." },
            ProductFeature { kind: FeatureKind::QuickTurnaround, title: "Quick Turnaround", description: "Benefit from fast production and delivery timelines to meet your business needs efficiently." },
        ],
    },
];
