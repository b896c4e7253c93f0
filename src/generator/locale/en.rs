pub static FIRST_NAMES: &[&str] = &[
    "Avery", "Cameron", "Dakota", "Dylan", "Harper", "Jordan", "Logan", "Morgan",
    "Parker", "Quinn", "Riley", "Rowan", "Skyler", "Taylor", "Alex", "Casey",
    "Jamie", "Jesse", "Lee", "Shawn", "Sam", "Noah", "Mia", "Liam", "Emma",
];

pub static LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Clark", "Lewis", "Lee", "Walker",
];

/// RFC 2606 reserved domains, so generated addresses never reach a real mailbox.
pub static EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

pub static STREET_NAMES: &[&str] = &[
    "Oak", "Pine", "Maple", "Cedar", "Elm", "Birch", "Willow", "Sunset", "Sunrise",
    "Highland", "Valley", "Hill", "Ridge", "Creek", "River", "Lake", "Park", "Garden",
    "Spring", "Summer", "Winter", "Autumn", "North", "South", "East", "West", "Central",
    "Main", "First", "Second", "Third", "Lincoln", "Washington", "Madison", "Franklin",
];

pub static STREET_SUFFIXES: &[&str] = &[
    "St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Way", "Ct", "Pl", "Terrace",
    "Circle", "Loop", "Trail", "Path", "Grove",
];

pub static CITY_PREFIXES: &[&str] = &[
    "Spring", "River", "Lake", "Hill", "Valley", "Park", "Green", "Fair", "Pleasant",
    "Bright", "Clear", "Grand", "Red", "Blue", "New", "Old", "North", "South", "East",
    "West", "Port", "Fort", "Mount", "Glen", "Brook", "Wood", "Field", "Stone",
    "Golden", "Silver",
];

pub static CITY_SUFFIXES: &[&str] = &[
    "ville", "town", "city", "burg", "ford", "field", "wood", "dale", "view", "haven",
    "port", "ridge", "grove", "falls", "springs", "heights", "garden", "meadow",
];
