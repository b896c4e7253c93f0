pub static PROVINCES: &[&str] = &[
    "ON", "QC", "BC", "AB", "MB", "SK", "NS", "NB", "NL", "PE", "NT", "YT", "NU",
];

/// Letters allowed in a Canadian postal code; D, F, I, O, Q, U, W and Z never appear.
pub static POSTAL_LETTERS: &[char] = &[
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'X', 'Y',
];
