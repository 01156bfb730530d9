//! Static page content.
//!
//! One table per section. The landing crate renders each table through a
//! single component, so copy changes never touch markup.

use crate::booking::ServiceKind;
use crate::section::SectionId;

pub const BRAND_PREFIX: &str = "CareAt";
pub const BRAND_SUFFIX: &str = "Home";

/// Navbar entry pointing at a same-document section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services", target: SectionId::Services },
    NavLink { label: "Packages", target: SectionId::Packages },
    NavLink { label: "Reviews", target: SectionId::Testimonials },
    NavLink { label: "Contact", target: SectionId::Contact },
];

/// Where "Book Now" and "Book a Home Visit" jump to.
pub const BOOKING_TARGET: SectionId = SectionId::Contact;

pub struct Hero {
    pub badges: &'static [&'static str],
    pub title_lines: [&'static str; 2],
    pub subtitle: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
}

pub const HERO: Hero = Hero {
    badges: &["Certified Nurses", "24/7 Home Care", "Trusted by 500+ Families"],
    title_lines: [
        "Professional Home Nursing &",
        "Physiotherapy \u{2013} At Your Doorstep",
    ],
    subtitle: "Certified nurses and therapists providing compassionate care and medical assistance at home.",
    primary_action: "Book a Home Visit",
    secondary_action: "Call Now / WhatsApp Now",
    image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=1920&h=1080&fit=crop",
    image_alt: "Professional nurse",
};

/// Icon, title and one-line description. Used by several grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Heading block shared by every content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

pub const SERVICES_HEADING: SectionHeading = SectionHeading {
    title: "Our Services",
    subtitle: Some("Comprehensive healthcare services delivered with care and professionalism"),
};

pub const SERVICES: &[Card] = &[
    Card {
        icon: "🏥",
        title: "Home Nursing Care",
        description: "Vitals monitoring, dressing changes, IV/injections, post-surgery care",
    },
    Card {
        icon: "💪",
        title: "Physiotherapy at Home",
        description: "Stroke rehab, joint pain, back pain, mobility exercises",
    },
    Card {
        icon: "👴",
        title: "Elderly Care",
        description: "Daily assistance, medication reminders, companionship",
    },
    Card {
        icon: "🛁",
        title: "Patient Attendant",
        description: "Feeding, bathing, personal care",
    },
    Card {
        icon: "👶",
        title: "Mother & Baby Care",
        description: "Postnatal care, newborn care",
    },
    Card {
        icon: "♿",
        title: "Special Needs Care",
        description: "Disability support, long-term care",
    },
    Card {
        icon: "❤️",
        title: "Chronic Disease Management",
        description: "Diabetes, hypertension, heart care management",
    },
    Card {
        icon: "🤲",
        title: "Palliative Care",
        description: "Comfort care, pain management, emotional support",
    },
];

pub const WHY_CHOOSE_US_HEADING: SectionHeading = SectionHeading {
    title: "Why Choose Us",
    subtitle: None,
};

pub const WHY_CHOOSE_US: &[Card] = &[
    Card {
        icon: "✓",
        title: "Licensed & Experienced Nurses",
        description: "All our nurses are fully certified and have years of experience in home healthcare",
    },
    Card {
        icon: "⏰",
        title: "24/7 Availability",
        description: "Round-the-clock services for emergencies and scheduled care",
    },
    Card {
        icon: "📋",
        title: "Flexible Care Packages",
        description: "Customized packages to suit your specific needs and budget",
    },
    Card {
        icon: "🏥",
        title: "Trusted by Hospitals & Clinics",
        description: "Partnered with leading healthcare institutions",
    },
    Card {
        icon: "🚀",
        title: "Same-Day Home Visits",
        description: "Quick response time with same-day appointment availability",
    },
    Card {
        icon: "💰",
        title: "Affordable & Safe Services",
        description: "Transparent pricing with complete safety protocols",
    },
];

/// Card with a photo on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedService {
    pub card: Card,
    pub image: &'static str,
}

pub const FEATURED_HEADING: SectionHeading = SectionHeading {
    title: "Featured Services",
    subtitle: None,
};

pub const FEATURED: &[FeaturedService] = &[
    FeaturedService {
        card: Card {
            icon: "👩‍⚕️",
            title: "Home Nursing (RN/LPN)",
            description: "Daily medical care and monitoring by registered nurses",
        },
        image: "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?w=600&h=400&fit=crop",
    },
    FeaturedService {
        card: Card {
            icon: "🏃",
            title: "Home Physiotherapy",
            description: "Pain management and mobility recovery at your convenience",
        },
        image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=600&h=400&fit=crop",
    },
    FeaturedService {
        card: Card {
            icon: "🏥",
            title: "Post-Surgery Care",
            description: "Support for patients recovering at home with expert assistance",
        },
        image: "https://images.unsplash.com/photo-1581056771107-24ca5f033842?w=600&h=400&fit=crop",
    },
];

/// One image of the gallery carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const GALLERY_HEADING: SectionHeading = SectionHeading {
    title: "Care in Action",
    subtitle: Some("A look at our nurses and therapists at work"),
};

pub const SLIDES: &[Slide] = &[
    Slide {
        image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=1200&h=600&fit=crop",
        alt: "Nurse checking a patient's vitals",
        caption: "Certified nurses at your bedside",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?w=1200&h=600&fit=crop",
        alt: "Registered nurse during a home visit",
        caption: "Daily monitoring by registered nurses",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=1200&h=600&fit=crop",
        alt: "Physiotherapy session at home",
        caption: "Mobility recovery without the commute",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1581056771107-24ca5f033842?w=1200&h=600&fit=crop",
        alt: "Post-surgery care",
        caption: "Post-surgery support through recovery",
    },
    Slide {
        image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=1200&h=600&fit=crop",
        alt: "Care team",
        caption: "A care team that knows your family",
    },
];

/// Numbered "How It Works" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOW_IT_WORKS_HEADING: SectionHeading = SectionHeading {
    title: "How It Works",
    subtitle: None,
};

pub const STEPS: &[Step] = &[
    Step {
        title: "Book Online or Call Us",
        description: "Schedule your appointment through our website or call our helpline",
    },
    Step {
        title: "Certified Nurse Assigned",
        description: "We assign a qualified nurse based on your specific needs",
    },
    Step {
        title: "Nurse Visits Your Home",
        description: "Our professional arrives at your home at the scheduled time",
    },
    Step {
        title: "Daily Progress Updates",
        description: "Receive regular updates on patient progress and care plans",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub review: &'static str,
    /// Stars out of [`MAX_RATING`].
    pub rating: u8,
}

pub const MAX_RATING: u8 = 5;

impl Testimonial {
    /// First letter of each name part, for the avatar bubble.
    pub fn initials(&self) -> String {
        initials(self.name)
    }

    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(MAX_RATING))
    }
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub const TESTIMONIALS_HEADING: SectionHeading = SectionHeading {
    title: "Client Reviews",
    subtitle: None,
};

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Rajesh Kumar",
        location: "Delhi",
        review: "The CareAtHome nurse took care of my father after surgery. Highly satisfied! Professional and caring service.",
        rating: 5,
    },
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai",
        review: "Excellent physiotherapy services at home. My mother's mobility improved significantly. Thank you!",
        rating: 5,
    },
    Testimonial {
        name: "Amit Patel",
        location: "Bangalore",
        review: "24/7 availability is a blessing. The nurses are experienced and compassionate. Highly recommend!",
        rating: 5,
    },
    Testimonial {
        name: "Sunita Reddy",
        location: "Hyderabad",
        review: "Affordable packages with quality care. The team is professional and understanding. Great service!",
        rating: 5,
    },
];

/// Pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub hours: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    /// Drawn with an accent border and a filled button.
    pub highlighted: bool,
}

pub const PACKAGES_HEADING: SectionHeading = SectionHeading {
    title: "Care Packages",
    subtitle: Some("Choose a package that suits your needs"),
};

pub const PACKAGES: &[Package] = &[
    Package {
        name: "Basic",
        hours: "2 hours",
        price: "₹800",
        features: &["Daily monitoring", "Basic nursing care", "Medication assistance"],
        highlighted: false,
    },
    Package {
        name: "Standard",
        hours: "6 hours",
        price: "₹1,800",
        features: &["Nursing + Physiotherapy", "Health assessments", "Daily reports"],
        highlighted: true,
    },
    Package {
        name: "Premium",
        hours: "12-24 hour",
        price: "₹3,500",
        features: &["Full-time trained nurse", "Complete care management", "24/7 support"],
        highlighted: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct About {
    pub title: &'static str,
    pub blurb: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub stats: [Stat; 2],
    pub highlights: &'static [&'static str],
}

pub const ABOUT: About = About {
    title: "About Us",
    blurb: "We provide compassionate medical support to patients in the comfort of their homes. \
            With years of experience in home healthcare, our team of certified nurses and \
            physiotherapists is dedicated to delivering quality care that promotes healing and well-being.",
    image: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=800&h=600&fit=crop",
    image_alt: "Care team",
    stats: [
        Stat { value: "10+", label: "Years Experience" },
        Stat { value: "500+", label: "Families Served" },
    ],
    highlights: &[
        "Serving Delhi, Mumbai, Bangalore, Hyderabad",
        "Mission: Quality healthcare accessible to all",
    ],
};

pub const SAFETY_HEADING: SectionHeading = SectionHeading {
    title: "Safety Protocols",
    subtitle: Some("Your safety is our priority"),
};

pub const SAFETY_ICON: &str = "🛡️";

pub const SAFETY: &[Card] = &[
    Card { icon: SAFETY_ICON, title: "Gloves", description: "Fresh gloves for every visit" },
    Card { icon: SAFETY_ICON, title: "Masks", description: "Protective masks worn at all times" },
    Card {
        icon: SAFETY_ICON,
        title: "Hygiene Kit",
        description: "Complete sanitization before each visit",
    },
    Card {
        icon: SAFETY_ICON,
        title: "Health Checks",
        description: "Regular health screening of staff",
    },
];

pub const CONTACT_HEADING: SectionHeading = SectionHeading {
    title: "Request a Home Visit",
    subtitle: Some("Fill out the form below and we'll get back to you shortly"),
};

pub const CONTACT_AVAILABILITY: &str = "24/7 Available | Same-Day Appointments";
pub const SERVICE_PLACEHOLDER: &str = "Select Service";

/// Options of the form's service dropdown, placeholder excluded.
pub fn service_options() -> impl Iterator<Item = &'static str> {
    ServiceKind::ALL.into_iter().map(|kind| kind.label())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const FOOTER_BLURB: &str = "Professional home healthcare services with certified nurses and physiotherapists dedicated to your wellbeing.";

pub const FOOTER_SERVICE_LINKS: &[FooterLink] = &[
    FooterLink { label: "Home Nursing Care", href: "#services" },
    FooterLink { label: "Physiotherapy", href: "#services" },
    FooterLink { label: "Elderly Care", href: "#services" },
    FooterLink { label: "Patient Attendant", href: "#services" },
    FooterLink { label: "Mother & Baby Care", href: "#services" },
];

pub const FOOTER_COMPANY_LINKS: &[FooterLink] = &[
    FooterLink { label: "About Us", href: "#about" },
    FooterLink { label: "Our Team", href: "#" },
    FooterLink { label: "Careers", href: "#" },
    FooterLink { label: "Contact", href: "#contact" },
    FooterLink { label: "Privacy Policy", href: "#" },
];

/// Social profile button with its 24x24 SVG path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_path: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Facebook",
        href: "#",
        icon_path: "M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z",
    },
    SocialLink {
        label: "Twitter",
        href: "#",
        icon_path: "M23.953 4.57a10 10 0 01-2.825.775 4.958 4.958 0 002.163-2.723c-.951.555-2.005.959-3.127 1.184a4.92 4.92 0 00-8.384 4.482C7.69 8.095 4.067 6.13 1.64 3.162a4.822 4.822 0 00-.666 2.475c0 1.71.87 3.213 2.188 4.096a4.904 4.904 0 01-2.228-.616v.06a4.923 4.923 0 003.946 4.827 4.996 4.996 0 01-2.212.085 4.936 4.936 0 004.604 3.417 9.867 9.867 0 01-6.102 2.105c-.39 0-.779-.023-1.17-.067a13.995 13.995 0 007.557 2.209c9.053 0 13.998-7.496 13.998-13.985 0-.21 0-.42-.015-.63A9.935 9.935 0 0024 4.59z",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon_path: "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    },
];

pub const COPYRIGHT: &str = "© 2024 CareAtHome. All rights reserved.";

/// 20x20 check-in-circle used by package features and about highlights.
pub const CHECK_ICON_PATH: &str = "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z";

/// 20x20 rating star.
pub const STAR_ICON_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

/// 24x24 hamburger for the mobile menu button.
pub const MENU_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";
