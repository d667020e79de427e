#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLabel {
    pub id: &'static str,
    pub name: &'static str,
    pub text: &'static str,
}

pub const SAMPLE_LABELS: [SampleLabel; 3] = [
    SampleLabel {
        id: "soda",
        name: "Soda Can",
        text: "Ingredients: Carbonated Water, High Fructose Corn Syrup, Caramel Color, Phosphoric Acid, Natural Flavors, Caffeine.",
    },
    SampleLabel {
        id: "chips",
        name: "Potato Chips",
        text: "Ingredients: Potatoes, Vegetable Oil (Sunflower, Corn, and/or Canola Oil), Maltodextrin, Salt, Dextrose, Monosodium Glutamate, Onion Powder.",
    },
    SampleLabel {
        id: "candy",
        name: "Candy Bar",
        text: "Ingredients: Sugar, Corn Syrup, Hydrogenated Palm Kernel Oil; Less Than 2% Of: Citric Acid, Tapioca Dextrin, Modified Corn Starch, Natural And Artificial Flavors, Red 40 Lake.",
    },
];

pub fn find_sample(id: &str) -> Option<&'static SampleLabel> {
    SAMPLE_LABELS.iter().find(|sample| sample.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sample() {
        assert_eq!(find_sample("chips").map(|s| s.name), Some("Potato Chips"));
        assert!(find_sample("Chips").is_none());
        assert!(find_sample("salad").is_none());
    }

    #[test]
    fn test_samples_are_ingredient_lists() {
        for sample in SAMPLE_LABELS {
            assert!(sample.text.starts_with("Ingredients: "), "{}", sample.id);
        }
    }
}
