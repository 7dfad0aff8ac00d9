//! Large-letter rendering for the clock face.
//!
//! Glyphs follow the FIGlet "standard" letterforms. Only the characters a
//! formatted duration can contain are defined; anything else is drawn as a
//! blank gap of `BLANK_WIDTH` columns.

pub const GLYPH_HEIGHT: usize = 6;

const BLANK_WIDTH: usize = 3;

type Glyph = [&'static str; GLYPH_HEIGHT];

const ZERO: Glyph = [
  r"  ___  ",
  r" / _ \ ",
  r"| | | |",
  r"| |_| |",
  r" \___/ ",
  r"       ",
];

const ONE: Glyph = [
  r" _ ",
  r"/ |",
  r"| |",
  r"| |",
  r"|_|",
  r"   ",
];

const TWO: Glyph = [
  r" ____  ",
  r"|___ \ ",
  r"  __) |",
  r" / __/ ",
  r"|_____|",
  r"       ",
];

const THREE: Glyph = [
  r" _____ ",
  r"|___ / ",
  r"  |_ \ ",
  r" ___) |",
  r"|____/ ",
  r"       ",
];

const FOUR: Glyph = [
  r" _  _   ",
  r"| || |  ",
  r"| || |_ ",
  r"|__   _|",
  r"   |_|  ",
  r"        ",
];

const FIVE: Glyph = [
  r" ____  ",
  r"| ___| ",
  r"|___ \ ",
  r" ___) |",
  r"|____/ ",
  r"       ",
];

const SIX: Glyph = [
  r"  __   ",
  r" / /_  ",
  r"| '_ \ ",
  r"| (_) |",
  r" \___/ ",
  r"       ",
];

const SEVEN: Glyph = [
  r" _____ ",
  r"|___  |",
  r"   / / ",
  r"  / /  ",
  r" /_/   ",
  r"       ",
];

const EIGHT: Glyph = [
  r"  ___  ",
  r" ( _ ) ",
  r" / _ \ ",
  r"| (_) |",
  r" \___/ ",
  r"       ",
];

const NINE: Glyph = [
  r"  ___  ",
  r" / _ \ ",
  r"| (_) |",
  r" \__, |",
  r"   /_/ ",
  r"       ",
];

const COLON: Glyph = [
  r"   ",
  r" _ ",
  r"(_)",
  r" _ ",
  r"(_)",
  r"   ",
];

pub fn glyph(character: char) -> Option<&'static Glyph> {
  let glyph = match character {
    '0' => &ZERO,
    '1' => &ONE,
    '2' => &TWO,
    '3' => &THREE,
    '4' => &FOUR,
    '5' => &FIVE,
    '6' => &SIX,
    '7' => &SEVEN,
    '8' => &EIGHT,
    '9' => &NINE,
    ':' => &COLON,
    _ => return None,
  };

  Some(glyph)
}

pub fn render(text: &str) -> Vec<String> {
  let mut lines = vec![String::new(); GLYPH_HEIGHT];

  for character in text.chars() {
    match glyph(character) {
      Some(rows) => {
        for (line, row) in lines.iter_mut().zip(rows.iter()) {
          line.push_str(row);
        }
      }
      None => {
        log::warn!("no glyph for {character:?}, leaving a gap");

        for line in lines.iter_mut() {
          line.push_str(&" ".repeat(BLANK_WIDTH));
        }
      }
    }
  }

  lines
}
