/// (name, description, base price in cents, duration hours, max guests)
pub const DEFAULT_PARTY_TYPES: &[(&str, &str, i64, i32, i32)] = &[
    ("Birthday Bash", "Balloons, cake table and a themed setup for all ages.", 25_000, 4, 80),
    ("Wedding Reception", "Elegant decor, seated dinner layout and a dance floor.", 150_000, 8, 300),
    ("Corporate Gala", "Stage, lighting and catering coordination for company events.", 90_000, 6, 250),
    ("Baby Shower", "Pastel theme with games corner and dessert bar.", 18_000, 3, 50),
    ("Graduation Party", "Photo wall, buffet setup and celebration banners.", 20_000, 4, 120),
    ("Anniversary Dinner", "Candle-lit tables and a private dining arrangement.", 30_000, 4, 40),
];

/// (name, description, price in cents, icon)
pub const DEFAULT_SERVICES: &[(&str, &str, i64, &str)] = &[
    ("Catering", "Buffet or plated menu prepared by our partner chefs.", 8_000, "utensils"),
    ("DJ & Sound", "Professional DJ with a full sound system.", 6_000, "music"),
    ("Photography", "Event photographer with an edited online gallery.", 7_500, "camera"),
    ("Decoration", "Flowers, table settings and themed decor.", 5_000, "star"),
    ("Cake", "Custom designed cake for up to 50 guests.", 3_500, "cake"),
];

/// (name, party type name, rating, comment)
pub const DEFAULT_TESTIMONIALS: &[(&str, &str, i32, &str)] = &[
    ("Priya S.", "Birthday Bash", 5, "Everything was ready on time and the kids loved it."),
    ("Marco T.", "Wedding Reception", 5, "Stress-free planning and a beautiful evening."),
    ("Helen W.", "Corporate Gala", 4, "Great coordination with our catering team."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_consistent() {
        assert!(DEFAULT_PARTY_TYPES.len() >= 6, "home page previews six party types");
        assert!(DEFAULT_PARTY_TYPES.iter().all(|(_, _, price, _, _)| *price >= 0));
        assert!(DEFAULT_SERVICES.iter().all(|(_, _, price, _)| *price >= 0));

        for (_, party, rating, _) in DEFAULT_TESTIMONIALS {
            assert!((1..=5).contains(rating));
            assert!(DEFAULT_PARTY_TYPES.iter().any(|(name, ..)| name == party), "unknown party type {}", party);
        }
    }
}
