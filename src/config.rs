pub const PRODUCT_NAME: &str = "Libérate del Estrés";
pub const PRODUCT_TAGLINE: &str = "Estrategias para recuperar tu equilibrio interior";

pub const AUTHOR_NAME: &str = "Damaris Martínez";
pub const AUTHOR_ROLE: &str = "Psicóloga Clínica";

pub const LIST_PRICE: &str = "$49.00";
pub const LAUNCH_PRICE: &str = "$8.99";
pub const PRICE_CURRENCY: &str = "USD";

// Placeholder portraits until the real campaign shots are delivered.
pub fn author_avatar_url() -> &'static str {
    "https://picsum.photos/seed/author/200/200"
}

pub fn author_portrait_url() -> &'static str {
    "https://picsum.photos/seed/damaris/600/600"
}
