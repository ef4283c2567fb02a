use crate::command::{Command, CommandKind, Coordinates};
use crate::ParseError;

/// Parses path data (the `d` attribute of an SVG `<path>`) into commands.
///
/// The input is split in front of every ASCII letter. Each piece is a command
/// letter followed by a run of numbers, which is chunked by the arity of the
/// command so that `L10,10 20,20` yields two `LineTo` commands and a bare `L`
/// yields none. `Z` always yields a single command and ignores anything that
/// follows it.
///
/// Whitespace and commas before the first command are ignored, anything else
/// is an error. Exponents (`1e5`) are not supported since `e` reads as an
/// unknown command.
pub fn parse(data: &str) -> Result<Vec<Command>, ParseError> {
    let starts: Vec<usize> = data
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();

    let first = starts.first().copied().unwrap_or(data.len());
    let leading = &data[..first];
    if let Some(offset) = leading.find(|c: char| !is_separator(c)) {
        return Err(ParseError::MissingCommand {
            found: leading[offset..].trim_end().to_string(),
            offset,
        });
    }

    let mut commands = Vec::with_capacity(starts.len());

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(data.len());

        // Letters are ASCII so the command takes exactly one byte.
        let letter = data.as_bytes()[start] as char;
        let rest = &data[start + 1..end];

        let Some((kind, position)) = CommandKind::from_letter(letter) else {
            return Err(ParseError::UnknownCommand {
                letter,
                offset: start,
            });
        };

        if kind == CommandKind::ClosePath {
            commands.push(Command::new_unchecked(kind, position, Coordinates::new()));
            continue;
        }

        let numbers = parse_numbers(rest)?;
        let arity = kind.arity();

        // An empty run passes and yields no commands.
        if numbers.len() % arity != 0 {
            return Err(ParseError::CoordinateCount {
                command: letter,
                expected: arity,
                found: numbers.len(),
            });
        }

        commands.extend(numbers.chunks_exact(arity).map(|chunk| {
            Command::new_unchecked(kind, position, chunk.iter().copied().collect())
        }));
    }

    log::trace!(
        "parsed {} path commands from {} bytes",
        commands.len(),
        data.len()
    );

    Ok(commands)
}

/// Extracts every number from `s`.
///
/// A number is an optional `-`, optional integer digits, an optional `.` and
/// at least one digit. Numbers do not need separators, so `23.3-12.4` reads as
/// `23.3, -12.4` and `1.5.5` reads as `1.5, .5`. Any other character is a
/// separator.
///
/// A number too large to be represented as a finite `f64` is an error.
pub fn parse_numbers(s: &str) -> Result<Vec<f64>, ParseError> {
    let bytes = s.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let Some(end) = match_number(bytes, i) else {
            i += 1;
            continue;
        };

        let text = &s[i..end];
        let value = text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ParseError::InvalidNumber(text.to_string()))?;
        numbers.push(value);

        i = end;
    }

    Ok(numbers)
}

/// Returns the end of the number starting at `start`, if there is one.
fn match_number(bytes: &[u8], start: usize) -> Option<usize> {
    let digits_from = |mut j: usize| {
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        j
    };

    let mut j = start;
    if bytes.get(j) == Some(&b'-') {
        j += 1;
    }

    let int_start = j;
    let int_end = digits_from(int_start);

    if bytes.get(int_end) == Some(&b'.')
        && bytes.get(int_end + 1).is_some_and(u8::is_ascii_digit)
    {
        return Some(digits_from(int_end + 1));
    }

    (int_end > int_start).then_some(int_end)
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn cmd(s: &str) -> Command {
        s.parse().unwrap()
    }

    #[test]
    fn numbers_without_separators() {
        assert_eq!(
            parse_numbers("23.3-12.4-43.2-12.2").unwrap(),
            vec![23.3, -12.4, -43.2, -12.2]
        );
        assert_eq!(
            parse_numbers("23.3 -12.4 -43.2 -12.2").unwrap(),
            vec![23.3, -12.4, -43.2, -12.2]
        );
        assert_eq!(parse_numbers(" ,10,,20 ").unwrap(), vec![10.0, 20.0]);
    }

    #[test]
    fn numbers_edge_cases() {
        assert_eq!(parse_numbers("1.5.5").unwrap(), vec![1.5, 0.5]);
        assert_eq!(parse_numbers("-.5.25").unwrap(), vec![-0.5, 0.25]);
        assert_eq!(parse_numbers("12.").unwrap(), vec![12.0]);
        assert_eq!(parse_numbers("--3").unwrap(), vec![-3.0]);
        assert_eq!(parse_numbers("- . ").unwrap(), Vec::<f64>::new());
        assert_eq!(parse_numbers("007").unwrap(), vec![7.0]);
    }

    #[test]
    fn simple_absolute_path() {
        let commands = parse("M2,2 L8,8").unwrap();
        assert_eq!(commands, vec![cmd("M2,2"), cmd("L8,8")]);
    }

    #[test]
    fn repeated_coordinates_split_into_commands() {
        let commands = parse("L10,10 20,20").unwrap();
        assert_eq!(commands, vec![cmd("L10,10"), cmd("L20,20")]);

        let commands = parse("c1 2 3 4 5 6 7 8 9 10 11 12").unwrap();
        assert_eq!(commands.len(), 2);
        assert!(commands.iter().all(|c| c.position() == Position::Relative));
        assert_eq!(commands[1].coordinates(), &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
    }

    #[test]
    fn close_path_ignores_trailing_data() {
        let commands = parse("M0,0 L1,1 Z 5 6 7").unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[2].kind(), CommandKind::ClosePath);
        assert!(commands[2].coordinates().is_empty());

        let commands = parse("M0,0zM1,1z").unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[1].position(), Position::Relative);
    }

    #[test]
    fn every_command_has_its_arity() {
        let commands = parse(
            "M1,2 m3,4 L5,6 l7,8 H9 h10 V11 v12 C1,2,3,4,5,6 c1,2,3,4,5,6 \
             S1,2,3,4 s1,2,3,4 Q1,2,3,4 q1,2,3,4 T1,2 t1,2 A1,2,3,0,1,6,7 a1,2,3,1,0,6,7 Z z",
        )
        .unwrap();

        assert_eq!(commands.len(), 20);
        for c in &commands {
            assert_eq!(c.coordinates().len(), c.kind().arity(), "{c}");
        }
    }

    #[test]
    fn leading_separators_are_allowed() {
        assert_eq!(parse("  \n M1,1").unwrap(), vec![cmd("M1,1")]);
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("   ").unwrap(), vec![]);
    }

    #[test]
    fn data_before_first_command_is_rejected() {
        assert_eq!(
            parse("10 M1,1"),
            Err(ParseError::MissingCommand {
                found: "10".to_string(),
                offset: 0
            })
        );
    }

    #[test]
    fn unknown_letter_is_rejected() {
        assert_eq!(
            parse("M1,1 X2,2"),
            Err(ParseError::UnknownCommand {
                letter: 'X',
                offset: 5
            })
        );
        assert!(matches!(
            parse("M1,1e5"),
            Err(ParseError::UnknownCommand { letter: 'e', .. })
        ));
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        assert_eq!(
            parse("M1,1 L2,2,3"),
            Err(ParseError::CoordinateCount {
                command: 'L',
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn letter_without_numbers_yields_nothing() {
        assert_eq!(parse("M1,1 L").unwrap(), vec![cmd("M1,1")]);
        assert_eq!(parse("M0,0 L c").unwrap(), vec![cmd("M0,0")]);
        assert_eq!(parse("M").unwrap(), vec![]);
        assert_eq!(
            parse("M1,1 L Z").unwrap(),
            vec![cmd("M1,1"), Command::close()]
        );
    }

    #[test]
    fn overflowing_number_is_rejected() {
        let huge = format!("1{}", "0".repeat(400));

        assert_eq!(
            parse_numbers(&huge),
            Err(ParseError::InvalidNumber(huge.clone()))
        );
        assert_eq!(
            parse(&format!("M{huge},0")),
            Err(ParseError::InvalidNumber(huge))
        );

        let big = format!("M1{},0", "0".repeat(300));
        let commands = parse(&big).unwrap();
        assert_eq!(parse(&crate::to_path_data(&commands)).unwrap(), commands);
    }

    #[test]
    fn serialized_commands_parse_back() {
        let data = "M2.5,-3 l-1.25.5 h4 V-7 c1 2 3 4 5 6 s1,1,2,2 q.5.5 1 1 t2-2 a5 25 -30 1 0 8 8 z";
        let commands = parse(data).unwrap();
        let again = parse(&crate::to_path_data(&commands)).unwrap();
        assert_eq!(commands, again);
    }
}
