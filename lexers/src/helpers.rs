#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these functions is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

// scan numbers like [0-9]+(\.[0-9]+)?([eE][0-9]+)?
// No sign anywhere: a leading '-' is an operator and the exponent is unsigned.
pub fn scan_number<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.buffer_pos();
    // require integer part
    if !scanner.skip_all(DIGITS) {
        scanner.set_buffer_pos(backtrack);
        return None;
    }
    // a fractional part needs at least one digit after the dot
    let backtrack = scanner.buffer_pos();
    if scanner.accept(&'.').is_some() && !scanner.skip_all(DIGITS) {
        scanner.set_buffer_pos(backtrack);
    }
    let backtrack = scanner.buffer_pos();
    if scanner.accept_any(&['e', 'E']).is_some() && !scanner.skip_all(DIGITS) {
        scanner.set_buffer_pos(backtrack);
    }
    Some(scanner.extract_string())
}

/// Scan the longest word of `words` found at the current position.
/// Ties go to the word listed first.
pub fn scan_longest<I, S>(scanner: &mut Scanner<I>, words: &[S]) -> Option<String>
where
    I: Iterator<Item = char>,
    S: AsRef<str>,
{
    let start = scanner.buffer_pos();
    let mut best: Option<isize> = None;
    for word in words {
        let word: &str = word.as_ref();
        if word.is_empty() {
            continue;
        }
        let chars: Vec<char> = word.chars().collect();
        if scanner.accept_seq(&chars) {
            let end = scanner.buffer_pos();
            if best.map_or(true, |best_end| end > best_end) {
                best = Some(end);
            }
            scanner.set_buffer_pos(start);
        }
    }
    scanner.set_buffer_pos(best?);
    Some(scanner.extract_string())
}

/// Skip a run of whitespace, result is if the scanner was advanced.
pub fn skip_whitespace<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> bool {
    let mut advanced = false;
    while let Some(c) = scanner.peek() {
        if !c.is_whitespace() {
            break;
        }
        scanner.next();
        advanced = true;
    }
    advanced
}

///////////////////////////////////////////////////////////////////////////////
