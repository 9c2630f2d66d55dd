/// Result cards
///
/// Each field of a successful analysis renders as its own collapsible card.
/// Cards start expanded; the controller tracks the collapsed set and resets
/// it whenever a new result arrives.

use std::collections::HashSet;

use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Element, Length, Theme};

use crate::analysis::AnalysisResult;
use crate::app::Message;
use crate::locale::LocaleText;

/// Identifies one collapsible content unit of the result view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardId {
    Summary,
    Why,
    When,
    Where,
    While,
    WithWhom,
    WithWhat,
    How,
    Insight,
}

/// Build the full result section: summary, the seven W cards, and the
/// strategic insight
pub fn result_cards<'a>(
    result: &'a AnalysisResult,
    text: &'static LocaleText,
    collapsed: &HashSet<CardId>,
) -> Element<'a, Message> {
    let open = |id: CardId| !collapsed.contains(&id);

    let mut section: Column<'a, Message> = column![summary_card(result, text, open(CardId::Summary))];

    let w_cards = [
        (CardId::Why, "Why", result.why.as_str(), false),
        (CardId::When, "When", result.when.as_str(), false),
        (CardId::Where, "Where", result.where_.as_str(), false),
        (CardId::While, "While", result.while_.as_str(), false),
        (CardId::WithWhom, "With Whom", result.with_whom.as_str(), false),
        (CardId::WithWhat, "With What", result.with_what.as_str(), false),
        (CardId::How, text.how_feeling, result.how.as_str(), true),
    ];

    for (id, title, body, highlight) in w_cards {
        section = section.push(card(id, title, body, open(id), highlight));
    }

    section = section.push(card(
        CardId::Insight,
        text.insight_title,
        &result.strategic_insight,
        open(CardId::Insight),
        true,
    ));

    section.spacing(10).width(Length::Fill).into()
}

/// The summary card, with the suggested-category chips in its header row
fn summary_card<'a>(
    result: &'a AnalysisResult,
    locale: &'static LocaleText,
    open: bool,
) -> Element<'a, Message> {
    let mut header = row![
        text(locale.summary_title).size(13),
        horizontal_space(),
    ]
    .spacing(6)
    .align_y(iced::Alignment::Center);

    if let Some(categories) = &result.suggested_categories {
        for category in categories {
            header = header.push(
                container(text(category.as_str()).size(11))
                    .padding([2.0, 8.0])
                    .style(container::rounded_box),
            );
        }
    }

    header = header.push(text(chevron(open)));

    let mut body: Column<'a, Message> = column![
        button(header)
            .style(button::text)
            .width(Length::Fill)
            .on_press(Message::CardToggled(CardId::Summary)),
    ]
    .spacing(8);

    if open {
        body = body.push(text(format!("\u{201c}{}\u{201d}", result.summary)).size(22));
    }

    container(body)
        .padding(14)
        .width(Length::Fill)
        .style(highlighted_card)
        .into()
}

/// One collapsible card: a toggle header plus the field text when expanded
fn card<'a>(
    id: CardId,
    title: &'a str,
    body: &'a str,
    open: bool,
    highlight: bool,
) -> Element<'a, Message> {
    let header = button(
        row![text(title).size(13), horizontal_space(), text(chevron(open))]
            .align_y(iced::Alignment::Center),
    )
    .style(button::text)
    .width(Length::Fill)
    .on_press(Message::CardToggled(id));

    let mut content: Column<'a, Message> = column![header].spacing(6);
    if open {
        content = content.push(text(body));
    }

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(if highlight {
            highlighted_card
        } else {
            container::bordered_box
        })
        .into()
}

fn chevron(open: bool) -> &'static str {
    if open {
        "\u{25BE}"
    } else {
        "\u{25B8}"
    }
}

/// Bordered box with the primary accent color, used for the summary, the
/// hoW (Feeling) card, and the strategic insight
fn highlighted_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let mut style = container::bordered_box(theme);
    style.border.color = palette.primary.strong.color;
    style.border.width = 2.0;
    style
}
