//! Built-in emoticon patterns.
//!
//! Keys are regular expressions. A pattern that extends another one
//! (`:))` after `:)`, `>:(` after `:(`) is declared later.

pub(crate) const EMOTICONS: &[(&str, &str)] = &[
    (r":\)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (r":-\)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (r":‑\)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (r":\]", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (r"=\)", "TOKEN_EMOTICON_HAPPY_FACE_OR_SMILEY"),
    (r":\)\)", "TOKEN_EMOTICON_VERY_HAPPY"),
    (r":-\)\)", "TOKEN_EMOTICON_VERY_HAPPY"),
    (r":D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    (r":-D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    (r":‑D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    (r"=D", "TOKEN_EMOTICON_LAUGHING_OR_BIG_GRIN_OR_LAUGH_WITH_GLASSES"),
    (r":\(", "TOKEN_EMOTICON_FROWN_OR_SAD"),
    (r":-\(", "TOKEN_EMOTICON_FROWN_OR_SAD"),
    (r":‑\(", "TOKEN_EMOTICON_FROWN_OR_SAD"),
    (r">:\(", "TOKEN_EMOTICON_ANGRY"),
    (r":'\(", "TOKEN_EMOTICON_CRYING"),
    (r":'\)", "TOKEN_EMOTICON_TEARS_OF_HAPPINESS"),
    (r";\)", "TOKEN_EMOTICON_WINK_OR_SMIRK"),
    (r";-\)", "TOKEN_EMOTICON_WINK_OR_SMIRK"),
    (r":P", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (r":-P", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (r":p", "TOKEN_EMOTICON_TONGUE_STICKING_OUT_CHEEKY_OR_PLAYFUL"),
    (r":O", "TOKEN_EMOTICON_SURPRISE_OR_SHOCK"),
    (r":-O", "TOKEN_EMOTICON_SURPRISE_OR_SHOCK"),
    (r":/", "TOKEN_EMOTICON_SKEPTICAL_ANNOYED_OR_UNDECIDED"),
    (r":-/", "TOKEN_EMOTICON_SKEPTICAL_ANNOYED_OR_UNDECIDED"),
    (r":\|", "TOKEN_EMOTICON_STRAIGHT_FACE"),
    (r":\*", "TOKEN_EMOTICON_KISS"),
    (r"<3", "TOKEN_EMOTICON_HEART"),
    (r"</3", "TOKEN_EMOTICON_BROKEN_HEART"),
    (r"\^_\^", "TOKEN_EMOTICON_JOYFUL"),
    (r"\^\^", "TOKEN_EMOTICON_JOYFUL"),
];
