//! Human-readable rendering of backend results

use notesearch_core::search_models::{IndexMessage, SearchResultItem, VideoInfo};

/// Longest comment excerpt shown per result
const MAX_EXCERPT_CHARS: usize = 120;

fn excerpt(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
        format!("{head}...")
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}

/// Render search results as a numbered list, in the order given
pub fn render_results(results: &[SearchResultItem]) -> String {
    if results.is_empty() {
        return "No matching comments.\n".to_string();
    }

    let mut out = String::new();
    for (rank, item) in results.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{:.4}] {}\n",
            rank + 1,
            item.similarity,
            excerpt(&item.comment_content)
        ));
        out.push_str(&format!(
            "   by {} ({}) at {}\n",
            or_unknown(&item.commenter_name),
            or_unknown(&item.commenter_location),
            item.comment_time
        ));
        out.push_str(&format!(
            "   on note {} \"{}\" by {} ({}), published {}\n",
            item.note_id,
            item.note_title,
            or_unknown(&item.author_name),
            or_unknown(&item.author_location),
            item.publish_time
        ));
    }
    out
}

/// Render video metadata
pub fn render_video(info: &VideoInfo) -> String {
    let download = info
        .video_download_url
        .as_deref()
        .unwrap_or("no playable source");

    let mut out = format!(
        "{}\n  author:      {} ({})\n  created:     {}\n  keyword:     {}\n  download:    {download}\n",
        info.title, info.nickname, info.sec_uid, info.create_time, info.source_keyword
    );
    if !info.desc.is_empty() {
        out.push_str(&format!("  description: {}\n", info.desc));
    }
    out
}

pub fn render_index_message(message: &IndexMessage) -> String {
    match &message.comment_id {
        Some(id) => format!("{} (comment {id})\n", message.msg),
        None => format!("{}\n", message.msg),
    }
}
