//! ASCII art banner for interactive mode.

use std::io::IsTerminal;

/// ANSI true-color escape sequences for the ghost banner palette.
struct Colors {
    sheet: &'static str,
    eyes: &'static str,
    title: &'static str,
    subtitle: &'static str,
    reset: &'static str,
}

const COLOR: Colors = Colors {
    sheet: "\x1b[38;2;230;230;245m",    // Off-white
    eyes: "\x1b[38;2;70;70;110m",       // Slate
    title: "\x1b[1;38;2;120;150;255m",  // Bold periwinkle
    subtitle: "\x1b[38;2;120;120;140m", // Gray-blue
    reset: "\x1b[0m",
};

const PLAIN: Colors = Colors {
    sheet: "",
    eyes: "",
    title: "",
    subtitle: "",
    reset: "",
};

/// Whether the banner should be shown for this invocation.
///
/// Only interactive sessions get it, so piped output stays clean.
pub fn should_print(no_banner: bool) -> bool {
    !no_banner && std::io::stdout().is_terminal()
}

/// Prints the ghostpass banner to stdout.
pub fn print_banner() {
    let c = if std::io::stdout().is_terminal() {
        &COLOR
    } else {
        &PLAIN
    };

    let sh = c.sheet;
    let ey = c.eyes;
    let tt = c.title;
    let st = c.subtitle;
    let r = c.reset;

    println!(
        r#"
{sh}     .-----.{r}
{sh}    /       \{r}       {tt}       _               _{r}
{sh}   |  {ey}O   O{sh}  |{r}      {tt}  __ _| |__   ___  ___| |_ _ __   __ _ ___ ___{r}
{sh}   |    {ey}o{sh}    |{r}      {tt} / _` | '_ \ / _ \/ __| __| '_ \ / _` / __/ __|{r}
{sh}   |         |{r}      {tt}| (_| | | | | (_) \__ \ |_| |_) | (_| \__ \__ \{r}
{sh}   |         |{r}      {tt} \__, |_| |_|\___/|___/\__| .__/ \__,_|___/___/{r}
{sh}   |/\/\/\/\/|{r}      {tt} |___/                    |_|{r}

                     {st}"Your secrets, hidden in plain sight."{r}
"#
    );
}
