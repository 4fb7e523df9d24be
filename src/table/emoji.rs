//! Built-in emoji labels.
//!
//! Entries that extend another entry (skin tones, variation selectors) are
//! declared after the shorter form so that clean and replace, which walk the
//! table in reverse, consume the longer sequence first.

pub(crate) const EMOJI: &[(&str, &str)] = &[
    ("😀", "TOKEN_EMOJI_GRINNING_FACE"),
    ("😃", "TOKEN_EMOJI_GRINNING_FACE_WITH_BIG_EYES"),
    ("😄", "TOKEN_EMOJI_GRINNING_FACE_WITH_SMILING_EYES"),
    ("😁", "TOKEN_EMOJI_BEAMING_FACE_WITH_SMILING_EYES"),
    ("😆", "TOKEN_EMOJI_GRINNING_SQUINTING_FACE"),
    ("😅", "TOKEN_EMOJI_GRINNING_FACE_WITH_SWEAT"),
    ("🤣", "TOKEN_EMOJI_ROLLING_ON_THE_FLOOR_LAUGHING"),
    ("😂", "TOKEN_EMOJI_FACE_WITH_TEARS_OF_JOY"),
    ("🙂", "TOKEN_EMOJI_SLIGHTLY_SMILING_FACE"),
    ("🙃", "TOKEN_EMOJI_UPSIDE_DOWN_FACE"),
    ("😉", "TOKEN_EMOJI_WINKING_FACE"),
    ("😊", "TOKEN_EMOJI_SMILING_FACE_WITH_SMILING_EYES"),
    ("😇", "TOKEN_EMOJI_SMILING_FACE_WITH_HALO"),
    ("😍", "TOKEN_EMOJI_SMILING_FACE_WITH_HEART_EYES"),
    ("😘", "TOKEN_EMOJI_FACE_BLOWING_A_KISS"),
    ("😋", "TOKEN_EMOJI_FACE_SAVORING_FOOD"),
    ("😜", "TOKEN_EMOJI_WINKING_FACE_WITH_TONGUE"),
    ("🤔", "TOKEN_EMOJI_THINKING_FACE"),
    ("😐", "TOKEN_EMOJI_NEUTRAL_FACE"),
    ("😏", "TOKEN_EMOJI_SMIRKING_FACE"),
    ("😒", "TOKEN_EMOJI_UNAMUSED_FACE"),
    ("🙄", "TOKEN_EMOJI_FACE_WITH_ROLLING_EYES"),
    ("😔", "TOKEN_EMOJI_PENSIVE_FACE"),
    ("😴", "TOKEN_EMOJI_SLEEPING_FACE"),
    ("😎", "TOKEN_EMOJI_SMILING_FACE_WITH_SUNGLASSES"),
    ("😕", "TOKEN_EMOJI_CONFUSED_FACE"),
    ("😮", "TOKEN_EMOJI_FACE_WITH_OPEN_MOUTH"),
    ("😢", "TOKEN_EMOJI_CRYING_FACE"),
    ("😭", "TOKEN_EMOJI_LOUDLY_CRYING_FACE"),
    ("😱", "TOKEN_EMOJI_FACE_SCREAMING_IN_FEAR"),
    ("😡", "TOKEN_EMOJI_POUTING_FACE"),
    ("😠", "TOKEN_EMOJI_ANGRY_FACE"),
    ("💩", "TOKEN_EMOJI_PILE_OF_POO"),
    ("👍", "TOKEN_EMOJI_THUMBS_UP"),
    ("👍🏻", "TOKEN_EMOJI_THUMBS_UP_LIGHT_SKIN_TONE"),
    ("👍🏽", "TOKEN_EMOJI_THUMBS_UP_MEDIUM_SKIN_TONE"),
    ("👍🏿", "TOKEN_EMOJI_THUMBS_UP_DARK_SKIN_TONE"),
    ("👎", "TOKEN_EMOJI_THUMBS_DOWN"),
    ("👏", "TOKEN_EMOJI_CLAPPING_HANDS"),
    ("🙏", "TOKEN_EMOJI_FOLDED_HANDS"),
    ("💪", "TOKEN_EMOJI_FLEXED_BICEPS"),
    ("👋", "TOKEN_EMOJI_WAVING_HAND"),
    ("👀", "TOKEN_EMOJI_EYES"),
    ("🔥", "TOKEN_EMOJI_FIRE"),
    ("✨", "TOKEN_EMOJI_SPARKLES"),
    ("🎉", "TOKEN_EMOJI_PARTY_POPPER"),
    ("💯", "TOKEN_EMOJI_HUNDRED_POINTS"),
    ("🚀", "TOKEN_EMOJI_ROCKET"),
    ("🌍", "TOKEN_EMOJI_GLOBE_SHOWING_EUROPE_AFRICA"),
    ("☕", "TOKEN_EMOJI_HOT_BEVERAGE"),
    ("💔", "TOKEN_EMOJI_BROKEN_HEART"),
    ("💕", "TOKEN_EMOJI_TWO_HEARTS"),
    ("❤", "TOKEN_EMOJI_RED_HEART"),
    ("❤️", "TOKEN_EMOJI_RED_HEART"),
    ("✅", "TOKEN_EMOJI_CHECK_MARK_BUTTON"),
    ("❌", "TOKEN_EMOJI_CROSS_MARK"),
];
