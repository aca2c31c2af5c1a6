use crate::Category;

/// Maps a free-text ingredient name to an aisle section.
///
/// Upstream ingredient names are uncontrolled ("Chicken Stock", "Red Chilli
/// Flakes"), so matching is keyword-within-name rather than an exact table.
/// Anything unrecognized lands in `Other`.
pub fn categorize(name: &str) -> Category {
    let normalized = name.trim().to_lowercase();

    // Probe order matters: "Ice Cream" must hit frozen before dairy sees
    // "cream", and "Eggplant" must hit produce before dairy sees "egg".
    if is_protein(&normalized) {
        return Category::Protein;
    }
    if is_frozen(&normalized) {
        return Category::Frozen;
    }
    if is_produce(&normalized) {
        return Category::Produce;
    }
    if is_dairy(&normalized) {
        return Category::Dairy;
    }
    if is_bakery(&normalized) {
        return Category::Bakery;
    }
    if is_pantry(&normalized) {
        return Category::Pantry;
    }

    Category::Other
}

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

fn is_protein(name: &str) -> bool {
    matches_any(
        name,
        &[
            "chicken", "beef", "pork", "lamb", "turkey", "duck", "veal", "bacon", "ham", "sausage",
            "steak", "mince", "salmon", "tuna", "cod", "haddock", "prawn", "shrimp", "crab",
            "lobster", "mussel", "anchovy", "sardine", "mackerel", "tofu",
        ],
    )
}

fn is_dairy(name: &str) -> bool {
    matches_any(
        name,
        &[
            "milk", "cream", "butter", "cheese", "cheddar", "mozzarella", "parmesan", "feta",
            "yogurt", "yoghurt", "egg",
        ],
    )
}

fn is_bakery(name: &str) -> bool {
    matches_any(
        name,
        &[
            "bread", "baguette", "bun", "roll", "tortilla", "pita", "naan", "croissant", "bagel",
            "dough", "pastry",
        ],
    )
}

fn is_frozen(name: &str) -> bool {
    matches_any(name, &["frozen", "ice cream"])
}

fn is_produce(name: &str) -> bool {
    matches_any(
        name,
        &[
            "tomato", "onion", "garlic", "lettuce", "carrot", "celery", "pepper", "chilli",
            "chili", "cucumber", "courgette", "zucchini", "broccoli", "cauliflower", "spinach",
            "kale", "cabbage", "potato", "mushroom", "bean", "pea", "corn", "avocado", "aubergine",
            "eggplant", "squash", "ginger", "coriander", "cilantro", "parsley", "basil", "mint",
            "thyme", "rosemary", "dill", "leek", "shallot", "spring onion", "apple", "banana",
            "orange", "lemon", "lime", "berr", "grape", "mango", "pineapple", "apricot", "fig",
            "date", "raisin", "sultana",
        ],
    )
}

fn is_pantry(name: &str) -> bool {
    matches_any(
        name,
        &[
            "flour", "rice", "pasta", "spaghetti", "penne", "noodle", "oat", "quinoa", "couscous",
            "lentil", "chickpea", "sugar", "baking powder", "baking soda", "bicarbonate", "yeast",
            "vanilla", "cocoa", "chocolate", "oil", "vinegar", "soy sauce", "fish sauce",
            "worcestershire", "ketchup", "mustard", "mayonnaise", "salt", "paprika", "cumin",
            "turmeric", "cinnamon", "nutmeg", "oregano", "curry", "stock", "broth", "honey",
            "syrup", "almond", "walnut", "cashew", "peanut", "sesame", "jam", "tomato puree",
            "passata", "coconut",
        ],
    )
}
