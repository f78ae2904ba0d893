//! Devotional trackers backed by the key-value port: tasbih counter, daily
//! deeds checklist, Quran and charity progress, Zakat calculation, and the
//! fixed dua/inspiration tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const TASBIH_KEY: &str = "tasbih_count";
pub const JUZ_KEY: &str = "quran_juz";
pub const CHARITY_KEY: &str = "charity_goal";

/// Number of juz in the Quran.
pub const JUZ_TOTAL: u32 = 30;
/// Charity jar UI step.
pub const CHARITY_STEP: u8 = 5;
/// Zakat is 2.5% of net zakatable wealth.
pub const ZAKAT_RATE: f64 = 0.025;

/// Dhikr counter persisted under [`TASBIH_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasbihCounter {
    count: u64,
}

impl TasbihCounter {
    /// Loads the persisted count; unreadable values start over at zero.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let count = store
            .get(TASBIH_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(TASBIH_KEY, self.count.to_string());
    }
}

/// The five tracked daily deeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deed {
    Fasting,
    Prayers,
    Taraweeh,
    Quran,
    Charity,
}

impl Deed {
    pub const ALL: [Deed; 5] = [
        Deed::Fasting,
        Deed::Prayers,
        Deed::Taraweeh,
        Deed::Quran,
        Deed::Charity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Deed::Fasting => "Fasting",
            Deed::Prayers => "Prayers",
            Deed::Taraweeh => "Taraweeh",
            Deed::Quran => "Recitation",
            Deed::Charity => "Sadaqah",
        }
    }
}

/// Per-date deeds checklist, persisted under `checklist_<date>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeedChecklist {
    pub fasting: bool,
    pub prayers: bool,
    pub taraweeh: bool,
    pub quran: bool,
    pub charity: bool,
}

impl DeedChecklist {
    fn storage_key(date: NaiveDate) -> String {
        format!("checklist_{date}")
    }

    /// Loads the checklist for `date`; unreadable entries start fresh.
    pub fn load(store: &impl KeyValueStore, date: NaiveDate) -> Self {
        store
            .get(&Self::storage_key(date))
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore, date: NaiveDate) {
        if let Ok(raw) = serde_json::to_string(self) {
            store.set(&Self::storage_key(date), raw);
        }
    }

    fn slot(&mut self, deed: Deed) -> &mut bool {
        match deed {
            Deed::Fasting => &mut self.fasting,
            Deed::Prayers => &mut self.prayers,
            Deed::Taraweeh => &mut self.taraweeh,
            Deed::Quran => &mut self.quran,
            Deed::Charity => &mut self.charity,
        }
    }

    pub fn toggle(&mut self, deed: Deed) {
        let slot = self.slot(deed);
        *slot = !*slot;
    }

    pub fn is_done(&self, deed: Deed) -> bool {
        match deed {
            Deed::Fasting => self.fasting,
            Deed::Prayers => self.prayers,
            Deed::Taraweeh => self.taraweeh,
            Deed::Quran => self.quran,
            Deed::Charity => self.charity,
        }
    }

    pub fn completed(&self) -> usize {
        Deed::ALL.iter().filter(|d| self.is_done(**d)).count()
    }
}

/// Quran reading progress in whole juz, clamped to 0..=30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JuzProgress {
    read: u32,
}

impl JuzProgress {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let read = store
            .get(JUZ_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
            .min(JUZ_TOTAL);
        Self { read }
    }

    pub fn read(&self) -> u32 {
        self.read
    }

    pub fn advance(&mut self) -> u32 {
        self.read = (self.read + 1).min(JUZ_TOTAL);
        self.read
    }

    pub fn retreat(&mut self) -> u32 {
        self.read = self.read.saturating_sub(1);
        self.read
    }

    pub fn percent(&self) -> f64 {
        f64::from(self.read) / f64::from(JUZ_TOTAL) * 100.0
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(JUZ_KEY, self.read.to_string());
    }
}

/// Charity goal completion, a percentage clamped to 0..=100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharityJar {
    percent: u8,
}

impl CharityJar {
    pub fn load(store: &impl KeyValueStore) -> Self {
        let percent = store
            .get(CHARITY_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
            .min(100);
        Self { percent }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn add(&mut self, step: u8) -> u8 {
        self.percent = self.percent.saturating_add(step).min(100);
        self.percent
    }

    pub fn subtract(&mut self, step: u8) -> u8 {
        self.percent = self.percent.saturating_sub(step);
        self.percent
    }

    pub fn reset(&mut self) {
        self.percent = 0;
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(CHARITY_KEY, self.percent.to_string());
    }
}

/// Zakatable wealth inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZakatInputs {
    pub cash: f64,
    pub gold: f64,
    pub silver: f64,
    pub investments: f64,
    pub debts: f64,
}

impl ZakatInputs {
    /// Zakat due: 2.5% of net wealth, floored at zero when debts exceed
    /// assets.
    pub fn due(&self) -> f64 {
        let net = self.cash + self.gold + self.silver + self.investments - self.debts;
        net.max(0.0) * ZAKAT_RATE
    }
}

/// A short devotional quote with its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inspiration {
    pub text: &'static str,
    pub source: &'static str,
}

pub const DAILY_INSPIRATIONS: [Inspiration; 5] = [
    Inspiration {
        text: "The best among you are those who have the best manners and character.",
        source: "Sahih Bukhari",
    },
    Inspiration {
        text: "Whoever fasts Ramadan out of faith and in the hope of reward will be forgiven his previous sins.",
        source: "Sahih Bukhari",
    },
    Inspiration {
        text: "The Prophet (PBUH) was the most generous of people, and he was most generous during Ramadan.",
        source: "Sahih Bukhari",
    },
    Inspiration {
        text: "When Ramadan begins, the gates of Paradise are opened and the gates of Hell are closed.",
        source: "Sahih Muslim",
    },
    Inspiration {
        text: "A person's wealth is not diminished by charity.",
        source: "Sahih Muslim",
    },
];

/// Rotates through the inspiration table by observance day number.
pub fn inspiration_for_day(day: u32) -> &'static Inspiration {
    &DAILY_INSPIRATIONS[day as usize % DAILY_INSPIRATIONS.len()]
}

/// Moods the dua finder answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Anxious,
    Sad,
    Happy,
    Angry,
}

/// A supplication with Arabic text and translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dua {
    pub title: &'static str,
    pub arabic: &'static str,
    pub english: &'static str,
}

pub const DAILY_DUAS: [Dua; 3] = [
    Dua {
        title: "Dua for Fasting",
        arabic: "وَبِصَوْمِ غَدٍ نَّوَيْتُ مِنْ شَهْرِ رَمَضَانَ",
        english: "I intend to keep the fast for tomorrow in the month of Ramadan.",
    },
    Dua {
        title: "Dua for Breaking Fast",
        arabic: "اللَّهُمَّ إِنِّي لَكَ صُمْتُ وَبِكَ آمَنْتُ وَعَلَيْكَ تَوَكَّلْتُ وَعَلَى رِزْقِكَ أَفْطَرْتُ",
        english: "O Allah! I fasted for You and I believe in You and I put my trust in You and with Your sustenance I break my fast.",
    },
    Dua {
        title: "Dua for Forgiveness",
        arabic: "اللَّهُمَّ إِنَّكَ عَفُوٌّ تُحِبُّ الْعَفْوَ فَاعْفُ عَنِّي",
        english: "O Allah, You are Most Forgiving, and You love forgiveness; so forgive me.",
    },
];

/// The dua matched to a mood.
pub fn dua_for_mood(mood: Mood) -> &'static Dua {
    const ANXIOUS: Dua = Dua {
        title: "Anxious",
        arabic: "اللَّهُمَّ إِنِّي أَعُوذُ بِكَ مِنَ الْهَمِّ وَالْحَزَنِ",
        english: "O Allah, I seek refuge in You from anxiety and sorrow.",
    };
    const SAD: Dua = Dua {
        title: "Sad",
        arabic: "لَا إِلٰهَ إِلَّا أَنْتَ سُبْحَانَكَ إِنِّي كُنْتُ مِنَ الظَّالِمِينَ",
        english: "There is no deity except You; exalted are You. Indeed, I have been of the wrongdoers.",
    };
    const HAPPY: Dua = Dua {
        title: "Happy",
        arabic: "الْحَمْدُ لِلَّهِ الَّذِي بِنِعْمَتِهِ تَتِمُّ الصَّالِحَاتُ",
        english: "All praise is for Allah by whose favor good things are perfected.",
    };
    const ANGRY: Dua = Dua {
        title: "Angry",
        arabic: "أَعُوذُ بِاللَّهِ مِنَ الشَّيْطَانِ الرَّجِيمِ",
        english: "I seek refuge in Allah from the accursed devil.",
    };

    match mood {
        Mood::Anxious => &ANXIOUS,
        Mood::Sad => &SAD,
        Mood::Happy => &HAPPY,
        Mood::Angry => &ANGRY,
    }
}
