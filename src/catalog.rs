//! Static reference data: common food values and diet tips.
//!
//! Display-only. Nothing here feeds the estimation pipeline.

use serde::Serialize;

/// Nutrition values for one food, per 100 g unless `serving` says otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub serving: &'static str,
    pub kcal: f64,
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

const fn food(
    name: &'static str,
    serving: &'static str,
    kcal: f64,
    protein_g: f64,
    carb_g: f64,
    fat_g: f64,
) -> FoodItem {
    FoodItem {
        name,
        serving,
        kcal,
        protein_g,
        carb_g,
        fat_g,
    }
}

/// Common Hungarian foods with their energy and macro content.
pub const FOODS: &[FoodItem] = &[
    food("Chicken breast", "100 g", 165.0, 31.0, 0.0, 3.6),
    food("Egg", "1 pc, 60 g", 86.0, 7.5, 0.4, 6.1),
    food("White rice, cooked", "100 g", 130.0, 2.7, 28.0, 0.3),
    food("Potato, boiled", "100 g", 77.0, 2.0, 17.0, 0.1),
    food("Apple", "100 g", 52.0, 0.3, 14.0, 0.2),
    food("Banana", "100 g", 89.0, 1.1, 23.0, 0.3),
    food("Watermelon", "100 g", 30.0, 0.6, 7.6, 0.2),
    food("Rolled oats", "100 g", 370.0, 13.0, 66.0, 7.0),
    food("Trappista cheese", "100 g", 336.0, 24.0, 0.5, 26.0),
    food("Milk", "100 ml", 61.0, 3.2, 4.8, 3.3),
    food("White bread", "100 g", 265.0, 9.0, 50.0, 3.2),
    food("Pasta, cooked", "100 g", 131.0, 5.0, 25.0, 1.1),
    food("Pork chop", "100 g", 242.0, 27.0, 0.0, 14.0),
    food("Salmon", "100 g", 208.0, 20.0, 0.0, 13.0),
    food("Broccoli", "100 g", 34.0, 2.8, 7.0, 0.4),
    food("Avocado", "100 g", 160.0, 2.0, 9.0, 15.0),
    food("Walnuts", "100 g", 654.0, 15.0, 14.0, 65.0),
    food("Mozzarella", "100 g", 280.0, 18.0, 3.1, 22.0),
    food("Yogurt", "100 g", 59.0, 3.5, 4.7, 3.3),
    food("Roast chicken thigh", "100 g", 245.0, 26.0, 0.0, 15.0),
];

/// Looks up a food by case-insensitive name fragment.
pub fn find_foods(query: &str) -> Vec<&'static FoodItem> {
    let needle = query.trim().to_lowercase();
    FOODS
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&needle))
        .collect()
}

/// One practical diet tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub text: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Drink more water",
        text: "A glass of water before a meal dulls hunger and can cut 10–15% of the calories \
               eaten at that meal. Aim for 2–3 liters a day.",
    },
    Tip {
        title: "Protein at every meal",
        text: "Protein is the most filling macronutrient, raises energy use through its thermic \
               effect and preserves muscle while losing weight. Aim for 25–35 g per meal.",
    },
    Tip {
        title: "Keep a food diary",
        text: "People who log their meals every day lose about twice as much as those who do \
               not, and spot hidden calories sooner.",
    },
    Tip {
        title: "Vegetables on every plate",
        text: "Fill at least half the plate with vegetables: lots of fiber and nutrients for few \
               calories, and longer satiety.",
    },
    Tip {
        title: "Regular meal rhythm",
        text: "Four or five smaller meals a day keep blood sugar steady and make binges less \
               likely. Avoid gaps longer than five hours.",
    },
    Tip {
        title: "Sleep enough",
        text: "Short sleep raises ghrelin and lowers leptin. Sleeping under 7 hours adds 300–500 \
               kcal of intake a day on average. Aim for 7–9 hours.",
    },
    Tip {
        title: "Cut liquid calories",
        text: "Soft drinks, juices, alcohol and milky coffees carry 200–500 kcal a serving \
               without easing hunger. Water, unsweetened tea and black coffee save a lot.",
    },
    Tip {
        title: "Move regularly",
        text: "8,000–10,000 steps a day burn an extra 300–500 kcal. Combine strength and \
               endurance work; more muscle lifts the BMR for good.",
    },
    Tip {
        title: "Use a smaller plate",
        text: "Food served on a smaller plate leads to eating 20–30% less without noticing.",
    },
    Tip {
        title: "Eat mindfully",
        text: "Eat slowly and put the cutlery down between bites. Fullness arrives 15–20 \
               minutes after eating.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_table_size() {
        assert_eq!(FOODS.len(), 20);
        assert_eq!(TIPS.len(), 10);
    }

    #[test]
    fn test_food_energy_roughly_matches_macros() {
        // Atwater factors; labelled values drift from them, but not wildly
        for f in FOODS {
            let atwater = f.protein_g * 4.0 + f.carb_g * 4.0 + f.fat_g * 9.0;
            let ratio = atwater / f.kcal;
            assert!(ratio > 0.7 && ratio < 1.35, "{}: {} vs {}", f.name, atwater, f.kcal);
        }
    }

    #[test]
    fn test_find_foods_case_insensitive() {
        let hits = find_foods("CHICKEN");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|f| f.name.to_lowercase().contains("chicken")));
    }

    #[test]
    fn test_find_foods_no_match() {
        assert!(find_foods("durian").is_empty());
    }
}
