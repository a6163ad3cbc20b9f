//! Bundled chapter metadata and reciters.
//!
//! The table is static so chapter pickers work offline; verse text always
//! comes from a [`ScriptureSource`](crate::traits::ScriptureSource).

use std::str::FromStr;

use crate::model::{ChapterSummary, Reciter, RevelationPlace};

use RevelationPlace::{Meccan, Medinan};

/// Chapters below this verse count are "short" by default.
pub const DEFAULT_SHORT_MAX: u32 = 20;

/// Chapters at or above this verse count are "long" by default.
pub const DEFAULT_LONG_MIN: u32 = 100;

/// Chapters commonly memorized first.
pub const POPULAR_CHAPTERS: [u16; 35] = [
    1, 2, 18, 36, 55, 67, 78, 87, 88, 89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102,
    103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114,
];

struct Entry {
    number: u16,
    name: &'static str,
    english_name: &'static str,
    english_name_translation: &'static str,
    verse_count: u32,
    revelation_place: RevelationPlace,
}

const fn entry(
    number: u16,
    name: &'static str,
    english_name: &'static str,
    english_name_translation: &'static str,
    verse_count: u32,
    revelation_place: RevelationPlace,
) -> Entry {
    Entry {
        number,
        name,
        english_name,
        english_name_translation,
        verse_count,
        revelation_place,
    }
}

impl Entry {
    fn summary(&self) -> ChapterSummary {
        ChapterSummary {
            number: self.number,
            name: self.name.to_string(),
            english_name: self.english_name.to_string(),
            english_name_translation: self.english_name_translation.to_string(),
            verse_count: self.verse_count,
            revelation_place: self.revelation_place,
        }
    }
}

#[rustfmt::skip]
const CHAPTERS: [Entry; 114] = [
    entry(1, "الفاتحة", "Al-Fatihah", "The Opening", 7, Meccan),
    entry(2, "البقرة", "Al-Baqarah", "The Cow", 286, Medinan),
    entry(3, "آل عمران", "Aal-E-Imran", "The Family of Imran", 200, Medinan),
    entry(4, "النساء", "An-Nisa", "The Women", 176, Medinan),
    entry(5, "المائدة", "Al-Maidah", "The Table", 120, Medinan),
    entry(6, "الأنعام", "Al-Anaam", "The Cattle", 165, Meccan),
    entry(7, "الأعراف", "Al-Araf", "The Heights", 206, Meccan),
    entry(8, "الأنفال", "Al-Anfal", "The Spoils of War", 75, Medinan),
    entry(9, "التوبة", "At-Taubah", "The Repentance", 129, Medinan),
    entry(10, "يونس", "Yunus", "Jonah", 109, Meccan),
    entry(11, "هود", "Hud", "Hud", 123, Meccan),
    entry(12, "يوسف", "Yusuf", "Joseph", 111, Meccan),
    entry(13, "الرعد", "Ar-Rad", "The Thunder", 43, Medinan),
    entry(14, "ابراهيم", "Ibrahim", "Abraham", 52, Meccan),
    entry(15, "الحجر", "Al-Hijr", "The Rocky Tract", 99, Meccan),
    entry(16, "النحل", "An-Nahl", "The Bees", 128, Meccan),
    entry(17, "الإسراء", "Al-Isra", "The Night Journey", 111, Meccan),
    entry(18, "الكهف", "Al-Kahf", "The Cave", 110, Meccan),
    entry(19, "مريم", "Maryam", "Mary", 98, Meccan),
    entry(20, "طه", "Ta-Ha", "Ta-Ha", 135, Meccan),
    entry(21, "الأنبياء", "Al-Anbiya", "The Prophets", 112, Meccan),
    entry(22, "الحج", "Al-Hajj", "The Pilgrimage", 78, Medinan),
    entry(23, "المؤمنون", "Al-Muminoon", "The Believers", 118, Meccan),
    entry(24, "النور", "An-Noor", "The Light", 64, Medinan),
    entry(25, "الفرقان", "Al-Furqan", "The Criterion", 77, Meccan),
    entry(26, "الشعراء", "Ash-Shuara", "The Poets", 227, Meccan),
    entry(27, "النمل", "An-Naml", "The Ants", 93, Meccan),
    entry(28, "القصص", "Al-Qasas", "The Stories", 88, Meccan),
    entry(29, "العنكبوت", "Al-Ankabut", "The Spider", 69, Meccan),
    entry(30, "الروم", "Ar-Room", "The Romans", 60, Meccan),
    entry(31, "لقمان", "Luqman", "Luqman", 34, Meccan),
    entry(32, "السجدة", "As-Sajdah", "The Prostration", 30, Meccan),
    entry(33, "الأحزاب", "Al-Ahzab", "The Combined Forces", 73, Medinan),
    entry(34, "سبأ", "Saba", "Sheba", 54, Meccan),
    entry(35, "فاطر", "Fatir", "The Originator", 45, Meccan),
    entry(36, "يس", "Ya-Seen", "Ya-Seen", 83, Meccan),
    entry(37, "الصافات", "As-Saaffat", "Those Ranges in Ranks", 182, Meccan),
    entry(38, "ص", "Sad", "Sad", 88, Meccan),
    entry(39, "الزمر", "Az-Zumar", "The Groups", 75, Meccan),
    entry(40, "غافر", "Ghafir", "The Forgiver", 85, Meccan),
    entry(41, "فصلت", "Fussilat", "Distinguished", 54, Meccan),
    entry(42, "الشورى", "Ash-Shura", "The Consultation", 53, Meccan),
    entry(43, "الزخرف", "Az-Zukhruf", "The Gold", 89, Meccan),
    entry(44, "الدخان", "Ad-Dukhan", "The Smoke", 59, Meccan),
    entry(45, "الجاثية", "Al-Jathiya", "The Kneeling", 37, Meccan),
    entry(46, "الأحقاف", "Al-Ahqaf", "The Valley", 35, Meccan),
    entry(47, "محمد", "Muhammad", "Muhammad", 38, Medinan),
    entry(48, "الفتح", "Al-Fath", "The Victory", 29, Medinan),
    entry(49, "الحجرات", "Al-Hujraat", "The Dwellings", 18, Medinan),
    entry(50, "ق", "Qaf", "Qaf", 45, Meccan),
    entry(51, "الذاريات", "Az-Zariyat", "The Scatterers", 60, Meccan),
    entry(52, "الطور", "At-Tur", "The Mount", 49, Meccan),
    entry(53, "النجم", "An-Najm", "The Star", 62, Meccan),
    entry(54, "القمر", "Al-Qamar", "The Moon", 55, Meccan),
    entry(55, "الرحمن", "Ar-Rahman", "The Most Gracious", 78, Medinan),
    entry(56, "الواقعة", "Al-Waqiah", "The Event", 96, Meccan),
    entry(57, "الحديد", "Al-Hadeed", "The Iron", 29, Medinan),
    entry(58, "المجادلة", "Al-Mujadilah", "The Reasoning", 22, Medinan),
    entry(59, "الحشر", "Al-Hashr", "The Gathering", 24, Medinan),
    entry(60, "الممتحنة", "Al-Mumtahanah", "The Tested", 13, Medinan),
    entry(61, "الصف", "As-Saff", "The Row", 14, Medinan),
    entry(62, "الجمعة", "Al-Jumuah", "Friday", 11, Medinan),
    entry(63, "المنافقون", "Al-Munafiqoon", "The Hypocrites", 11, Medinan),
    entry(64, "التغابن", "At-Taghabun", "The Loss & Gain", 18, Medinan),
    entry(65, "الطلاق", "At-Talaq", "The Divorce", 12, Medinan),
    entry(66, "التحريم", "At-Tahream", "The Prohibition", 12, Medinan),
    entry(67, "الملك", "Al-Mulk", "The Kingdom", 30, Meccan),
    entry(68, "القلم", "Al-Qalam", "The Pen", 52, Meccan),
    entry(69, "الحاقة", "Al-Haaqqa", "The Inevitable", 52, Meccan),
    entry(70, "المعارج", "Al-Maarij", "The Elevated Passages", 44, Meccan),
    entry(71, "نوح", "Nooh", "Noah", 28, Meccan),
    entry(72, "الجن", "Al-Jinn", "The Jinn", 28, Meccan),
    entry(73, "المزمل", "Al-Muzzammil", "The Wrapped", 20, Meccan),
    entry(74, "المدثر", "Al-Muddaththir", "The Cloaked", 56, Meccan),
    entry(75, "القيامة", "Al-Qiyamah", "The Resurrection", 40, Meccan),
    entry(76, "الانسان", "Al-Insan", "The Human", 31, Medinan),
    entry(77, "المرسلات", "Al-Mursalat", "Those Sent", 50, Meccan),
    entry(78, "النبأ", "An-Naba", "The Great News", 40, Meccan),
    entry(79, "النازعات", "An-Naziat", "Those Who Pull Out", 46, Meccan),
    entry(80, "عبس", "Abasa", "He Frowned", 42, Meccan),
    entry(81, "التكوير", "At-Takweer", "The Overthrowing", 29, Meccan),
    entry(82, "الإنفطار", "Al-Infitar", "The Cleaving", 19, Meccan),
    entry(83, "المطففين", "Al-Mutaffifeen", "Those Who Deal in Fraud", 36, Meccan),
    entry(84, "الإنشقاق", "Al-Inshiqaq", "The Splitting Asunder", 25, Meccan),
    entry(85, "البروج", "Al-Burooj", "The Stars", 22, Meccan),
    entry(86, "الطارق", "At-Tariq", "The Night-Comer", 17, Meccan),
    entry(87, "الأعلى", "Al-Ala", "The Most High", 19, Meccan),
    entry(88, "الغاشية", "Al-Ghashiya", "The Overwhelming", 26, Meccan),
    entry(89, "الفجر", "Al-Fajr", "The Dawn", 30, Meccan),
    entry(90, "البلد", "Al-Balad", "The City", 20, Meccan),
    entry(91, "الشمس", "Ash-Shams", "The Sun", 15, Meccan),
    entry(92, "الليل", "Al-Layl", "The Night", 21, Meccan),
    entry(93, "الضحى", "Ad-Dhuhaa", "The Forenoon", 11, Meccan),
    entry(94, "الشرح", "Al-Inshirah", "The Opening Forth", 8, Meccan),
    entry(95, "التين", "At-Teen", "The Fig", 8, Meccan),
    entry(96, "العلق", "Al-Alaq", "The Clot", 19, Meccan),
    entry(97, "القدر", "Al-Qadr", "The Night of Decree", 5, Meccan),
    entry(98, "البينة", "Al-Bayyinah", "The Proof", 8, Medinan),
    entry(99, "الزلزلة", "Az-Zalzalah", "The Earthquake", 8, Medinan),
    entry(100, "العاديات", "Al-Adiyah", "The Runners", 11, Meccan),
    entry(101, "القارعة", "Al-Qariah", "The Striking Hour", 11, Meccan),
    entry(102, "التكاثر", "At-Takathur", "The Piling Up", 8, Meccan),
    entry(103, "العصر", "Al-Asr", "The Time", 3, Meccan),
    entry(104, "الهمزة", "Al-Humazah", "The Slanderer", 9, Meccan),
    entry(105, "الفيل", "Al-Feel", "The Elephant", 5, Meccan),
    entry(106, "قريش", "Quraish", "Quraish", 4, Meccan),
    entry(107, "الماعون", "Al-Maun", "The Small Kindnesses", 7, Meccan),
    entry(108, "الكوثر", "Al-Kauthar", "The River of Abundance", 3, Meccan),
    entry(109, "الكافرون", "Al-Kafiroon", "The Disbelievers", 6, Meccan),
    entry(110, "النصر", "An-Nasr", "The Help", 3, Medinan),
    entry(111, "المسد", "Al-Masad", "The Palm Fiber", 5, Meccan),
    entry(112, "الإخلاص", "Al-Ikhlas", "The Sincerity", 4, Meccan),
    entry(113, "الفلق", "Al-Falaq", "The Daybreak", 5, Meccan),
    entry(114, "الناس", "An-Nas", "The People", 6, Meccan),
];

/// All 114 chapters in order.
pub fn chapters() -> Vec<ChapterSummary> {
    CHAPTERS.iter().map(Entry::summary).collect()
}

/// Look up a chapter by number.
pub fn chapter(number: u16) -> Option<ChapterSummary> {
    let index = usize::from(number).checked_sub(1)?;
    CHAPTERS.get(index).map(Entry::summary)
}

fn filtered(keep: impl Fn(&Entry) -> bool) -> Vec<ChapterSummary> {
    CHAPTERS.iter().filter(|e| keep(e)).map(Entry::summary).collect()
}

pub fn by_revelation(place: RevelationPlace) -> Vec<ChapterSummary> {
    filtered(|e| e.revelation_place == place)
}

/// Chapters with at most `max_verses` verses.
pub fn short_chapters(max_verses: u32) -> Vec<ChapterSummary> {
    filtered(|e| e.verse_count <= max_verses)
}

/// Chapters with at least `min_verses` verses.
pub fn long_chapters(min_verses: u32) -> Vec<ChapterSummary> {
    filtered(|e| e.verse_count >= min_verses)
}

pub fn popular_chapters() -> Vec<ChapterSummary> {
    filtered(|e| POPULAR_CHAPTERS.contains(&e.number))
}

/// Chapters whose native name contains `term`, or whose English name or
/// translated name contains it ignoring case.
pub fn search(term: &str) -> Vec<ChapterSummary> {
    chapters()
        .into_iter()
        .filter(|c| name_matches(c, term))
        .collect()
}

pub fn name_matches(chapter: &ChapterSummary, term: &str) -> bool {
    let lower = term.to_lowercase();
    chapter.name.contains(term)
        || chapter.english_name.to_lowercase().contains(&lower)
        || chapter.english_name_translation.to_lowercase().contains(&lower)
}

/// Named chapter-list filters, applicable to bundled or fetched summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterFilter {
    Short,
    Long,
    Popular,
    Meccan,
    Medinan,
}

impl ChapterFilter {
    pub fn matches(&self, chapter: &ChapterSummary) -> bool {
        match self {
            ChapterFilter::Short => chapter.verse_count <= DEFAULT_SHORT_MAX,
            ChapterFilter::Long => chapter.verse_count >= DEFAULT_LONG_MIN,
            ChapterFilter::Popular => POPULAR_CHAPTERS.contains(&chapter.number),
            ChapterFilter::Meccan => chapter.revelation_place == Meccan,
            ChapterFilter::Medinan => chapter.revelation_place == Medinan,
        }
    }
}

impl FromStr for ChapterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(ChapterFilter::Short),
            "long" => Ok(ChapterFilter::Long),
            "popular" => Ok(ChapterFilter::Popular),
            "meccan" => Ok(ChapterFilter::Meccan),
            "medinan" => Ok(ChapterFilter::Medinan),
            other => Err(format!(
                "unknown chapter filter: {other} (expected short, long, popular, meccan or medinan)"
            )),
        }
    }
}

/// Well-known reciters with chapter-level audio.
pub fn reciters() -> Vec<Reciter> {
    [
        ("ar.alafasy", "Mishary Alafasy"),
        ("ar.husary", "Mahmoud Khalil Al-Husary"),
        ("ar.minshawi", "Mohamed Siddiq Al-Minshawi"),
        ("ar.parhizgar", "AbdulBaset AbdulSamad"),
        ("ar.maher", "Maher Al Muaiqly"),
    ]
    .into_iter()
    .map(|(id, name)| Reciter {
        id: id.to_string(),
        name: name.to_string(),
        language: "Arabic".to_string(),
    })
    .collect()
}
