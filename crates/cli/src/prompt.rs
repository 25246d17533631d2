//! Invites interactives sur la console

use std::io::{self, BufRead, Write};

/// Pose une question et retourne la réponse, sans les espaces entourants
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "entrée standard fermée",
        ));
    }

    Ok(line.trim().to_string())
}

/// Demande la longueur de séquence jusqu'à obtenir un entier strictement positif
pub fn prompt_length<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<usize> {
    loop {
        let answer = prompt_line(input, output, "Longueur de la séquence: ")?;

        match answer.parse::<usize>() {
            Ok(length) if length > 0 => return Ok(length),
            _ => {
                writeln!(
                    output,
                    "Entrée invalide ({}). Veuillez saisir un entier strictement positif.",
                    answer
                )?;
            }
        }
    }
}

/// Demande confirmation avant d'écraser un fichier existant
///
/// Seul "y" (insensible à la casse) vaut confirmation; toute autre réponse
/// annule.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    filename: &str,
) -> io::Result<bool> {
    let label = format!("Le fichier {} existe déjà. L'écraser ? (y/n): ", filename);
    let answer = prompt_line(input, output, &label)?;

    Ok(answer.eq_ignore_ascii_case("y"))
}
