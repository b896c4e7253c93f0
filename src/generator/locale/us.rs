pub static STATES: &[&str] = &[
    "CA", "NY", "TX", "FL", "WA", "CO", "IL", "MA", "PA", "GA",
    "NC", "AZ", "MI", "OH", "VA", "NJ", "TN", "OR", "MN", "MD",
];

/// NANP area codes. Also used for Canada and any unrecognized country.
pub static AREA_CODES: &[u16] = &[
    212, 213, 214, 215, 216, 303, 305, 310, 312, 313, 404, 407, 408, 415, 416, 503,
    504, 505, 512, 516, 617, 646, 702, 703, 704, 718, 801, 802, 808, 818, 905,
];
