//! Built-in categories and their secret words.

/// Every local category with its word list, in display order.
pub const WORD_BANK: &[(&str, &[&str])] = &[
    (
        "Kitchen",
        &[
            "Toaster",
            "Blender",
            "Refrigerator",
            "Microwave",
            "Dishwasher",
            "Oven",
            "Kettle",
            "Spatula",
            "Frying Pan",
            "Knife Block",
            "Cutting Board",
            "Sink",
            "Coffee Maker",
            "Spice Rack",
        ],
    ),
    (
        "School",
        &[
            "Blackboard",
            "Chalk",
            "Desk",
            "Textbook",
            "Backpack",
            "Pencil Case",
            "Teacher",
            "Principal",
            "Homework",
            "Recess",
            "Library",
            "Cafeteria",
            "Gymnasium",
            "School Bus",
        ],
    ),
    (
        "Beach",
        &[
            "Sandcastle",
            "Sunscreen",
            "Surfboard",
            "Towel",
            "Umbrella",
            "Seagull",
            "Crab",
            "Ocean",
            "Lifeguard",
            "Volleyball",
            "Ice Cream",
            "Flip Flops",
            "Shell",
            "Bucket",
        ],
    ),
    (
        "Space",
        &[
            "Astronaut",
            "Rocket",
            "Moon",
            "Sun",
            "Black Hole",
            "Satellite",
            "Meteor",
            "Alien",
            "Spacesuit",
            "Telescope",
            "Galaxy",
            "Mars",
            "Space Station",
            "Gravity",
        ],
    ),
    (
        "Hospital",
        &[
            "Doctor",
            "Nurse",
            "Stethoscope",
            "Wheelchair",
            "Ambulance",
            "Bandage",
            "Syringe",
            "X-Ray",
            "Patient",
            "Surgery",
            "Waiting Room",
            "Thermometer",
            "Crutches",
            "Medicine",
        ],
    ),
    (
        "Cinema",
        &[
            "Popcorn",
            "Ticket",
            "Screen",
            "Projector",
            "3D Glasses",
            "Seat",
            "Trailer",
            "Actor",
            "Director",
            "Usher",
            "Soda",
            "Candy",
            "Credits",
            "Red Carpet",
        ],
    ),
    (
        "Supermarket",
        &[
            "Trolley",
            "Cashier",
            "Barcode Scanner",
            "Vegetables",
            "Freezer",
            "Receipt",
            "Basket",
            "Aisle",
            "Checkout",
            "Paper Bag",
            "Discount",
            "Shelf",
            "Dairy",
            "Bakery",
        ],
    ),
    (
        "Pirate Ship",
        &[
            "Captain",
            "Parrot",
            "Treasure Chest",
            "Map",
            "Cannon",
            "Anchor",
            "Sail",
            "Eye Patch",
            "Peg Leg",
            "Sword",
            "Skull Flag",
            "Barrel",
            "Compass",
            "Plank",
        ],
    ),
    (
        "Zoo",
        &[
            "Lion",
            "Giraffe",
            "Elephant",
            "Penguin",
            "Zookeeper",
            "Cage",
            "Ticket Booth",
            "Monkey",
            "Snake",
            "Map",
            "Souvenir Shop",
            "Bear",
            "Zebra",
            "Fence",
        ],
    ),
    (
        "Airport",
        &[
            "Passport",
            "Suitcase",
            "Pilot",
            "Stewardess",
            "Security Check",
            "Runway",
            "Ticket",
            "Boarding Pass",
            "Duty Free",
            "Luggage Belt",
            "Gate",
            "Airplane",
            "Control Tower",
        ],
    ),
];

/// Category names in display order.
pub fn categories() -> impl Iterator<Item = &'static str> {
    WORD_BANK.iter().map(|(name, _)| *name)
}

/// Canonical name of a local category, matched case-insensitively.
///
/// ```
/// use imposter_topics::wordbank::is_local_category;
///
/// assert_eq!(is_local_category("pirate ship"), Some("Pirate Ship"));
/// assert_eq!(is_local_category("Volcano"), None);
/// ```
pub fn is_local_category(name: &str) -> Option<&'static str> {
    let name = name.trim();
    categories().find(|c| c.eq_ignore_ascii_case(name))
}

/// Word list of a category, or `None` if it is not a local one.
pub fn words(category: &str) -> Option<&'static [&'static str]> {
    let canonical = is_local_category(category)?;
    WORD_BANK
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, words)| *words)
}
