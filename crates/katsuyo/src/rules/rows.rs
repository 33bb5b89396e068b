//! Vowel-row shift tables for godan endings.

/// A vowel row of the kana grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelRow {
    U,
    I,
    A,
    E,
    O,
}

impl VowelRow {
    fn column(self) -> usize {
        match self {
            VowelRow::U => 0,
            VowelRow::I => 1,
            VowelRow::A => 2,
            VowelRow::E => 3,
            VowelRow::O => 4,
        }
    }
}

/// Columns: u, i, a, e, o. The a-row of う is わ.
const GODAN_ROWS: [[char; 5]; 9] = [
    ['う', 'い', 'わ', 'え', 'お'],
    ['く', 'き', 'か', 'け', 'こ'],
    ['ぐ', 'ぎ', 'が', 'げ', 'ご'],
    ['す', 'し', 'さ', 'せ', 'そ'],
    ['つ', 'ち', 'た', 'て', 'と'],
    ['ぬ', 'に', 'な', 'ね', 'の'],
    ['ぶ', 'び', 'ば', 'べ', 'ぼ'],
    ['む', 'み', 'ま', 'め', 'も'],
    ['る', 'り', 'ら', 'れ', 'ろ'],
];

/// The nine kana a godan dictionary form can end in.
pub fn godan_endings() -> impl Iterator<Item = char> {
    GODAN_ROWS.iter().map(|row| row[0])
}

pub fn is_godan_ending(kana: char) -> bool {
    GODAN_ROWS.iter().any(|row| row[0] == kana)
}

/// Move a u-row godan ending to `row`.
///
/// Returns `None` if `kana` is not a godan ending.
pub fn shift(kana: char, row: VowelRow) -> Option<char> {
    GODAN_ROWS
        .iter()
        .find(|r| r[0] == kana)
        .map(|r| r[row.column()])
}
