use ghprofile_user::pulls::PullSummary;

use std::io::Write;

pub fn write_pulls(out: &mut impl Write, pulls: &[PullSummary]) -> std::io::Result<()> {
    if pulls.is_empty() {
        return writeln!(out, "No PRs found for this user");
    }

    for pull in pulls {
        writeln!(
            out,
            "{} {:<6} #{}: {}",
            pull.status.marker(),
            pull.status.as_str().to_uppercase(),
            pull.number,
            pull.title
        )?;
        writeln!(out, "    {}", pull.html_url)?;

        match pull.merged_at {
            Some(merged_at) => writeln!(
                out,
                "    Created: {} | Merged: {}",
                pull.created_at.date(),
                merged_at.date()
            )?,
            None => writeln!(out, "    Created: {}", pull.created_at.date())?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghprofile_user::pulls::PullStatus;

    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    fn timestamp(s: &str) -> OffsetDateTime {
        OffsetDateTime::parse(s, &Rfc3339).unwrap()
    }

    fn render(pulls: &[PullSummary]) -> String {
        let mut out = Vec::new();
        write_pulls(&mut out, pulls).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_list_should_say_so() {
        assert_eq!("No PRs found for this user\n", render(&[]));
    }

    #[test]
    fn merged_pull_should_show_both_dates() {
        let rendered = render(&[
            PullSummary {
                number: 7,
                title: "Add XPU kernel".to_string(),
                html_url: "https://github.com/intel/torch-xpu-ops/pull/7".to_string(),
                status: PullStatus::Merged,
                created_at: timestamp("2024-01-05T10:00:00Z"),
                merged_at: Some(timestamp("2024-01-07T12:30:00Z")),
            },
            PullSummary {
                number: 8,
                title: "Fix typo".to_string(),
                html_url: "https://github.com/intel/torch-xpu-ops/pull/8".to_string(),
                status: PullStatus::Open,
                created_at: timestamp("2024-02-01T08:00:00Z"),
                merged_at: None,
            },
        ]);

        assert_eq!(
            "✓ MERGED #7: Add XPU kernel\n    https://github.com/intel/torch-xpu-ops/pull/7\n    Created: 2024-01-05 | Merged: 2024-01-07\n\
             ○ OPEN   #8: Fix typo\n    https://github.com/intel/torch-xpu-ops/pull/8\n    Created: 2024-02-01\n",
            rendered
        );
    }
}
