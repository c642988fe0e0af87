// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Rainbow-coloured terminal output for the banner.

use std::f64::consts::PI;

const FREQUENCY: f64 = 0.1;
const SPREAD: f64 = 3.0;

/// Wraps every visible character of `line` in a 24-bit colour escape.
/// Whitespace is left as is.
pub fn paint(line: &str) -> String {
    let mut painted = String::with_capacity(line.len() * 20);
    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            painted.push(c);
        } else {
            let (r, g, b) = rgb(i as f64);
            painted.push_str(&format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, c));
        }
    }
    painted
}

/// Prints the text in the rainbow fashion.
pub fn rainbow_println(line: &str) {
    println!("{}", paint(line));
}

fn rgb(i: f64) -> (u8, u8, u8) {
    let j = FREQUENCY * i / SPREAD;
    let red = j.sin() * 127.0 + 128.0;
    let green = (j + 2.0 * PI / 3.0).sin() * 127.0 + 128.0;
    let blue = (j + 4.0 * PI / 3.0).sin() * 127.0 + 128.0;

    (red as u8, green as u8, blue as u8)
}
