// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ender_ansi_color::{BOLD, EnderColor, ITALIC, RESET, RgbColor, StyledLine,
                       UNDERLINE, background_color, fg_color, plain, text_color};

fn main() -> miette::Result<()> {
    // Print a string w/ raw escape sequences.
    {
        let fg = text_color("#323232")?;
        let bg = background_color((100, 200, 1))?;
        println!(
            "{BOLD}{ITALIC}{UNDERLINE}{fg}{bg}Print a formatted (bold, italic, underline) string w/ ANSI color codes.{RESET}"
        );
    }

    // Shorthand and long form resolve to the same canonical value.
    {
        let short = EnderColor::try_from_hex("#fab")?;
        let long = EnderColor::try_from_rgb(255, 170, 187)?;
        println!("{short}");
        println!("{long}");
        println!("> Same color: {}", short == long);
    }

    // Rich text.
    {
        StyledLine::from_iter([
            fg_color(RgbColor::from_u8(100, 0, 212), "EnderCore"),
            fg_color(RgbColor::from_u8(119, 119, 119), " »"),
            plain(" "),
            plain("Styled text lines are made of spans.").italic(),
        ])
        .println();
    }

    // Invalid input is reported, never replaced by a default color.
    {
        for input in ["#gg0000", "#12", "red"] {
            let Err(error) = text_color(input) else {
                continue;
            };
            println!("{:?}", miette::Report::new(error));
        }
    }

    Ok(())
}
