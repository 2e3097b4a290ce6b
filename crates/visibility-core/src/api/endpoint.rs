//! Endpoint Paths

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::model::QueryId;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    ChartData,
    Ranking,
    TopPrompts,
}

impl Widget {
    pub const ALL: [Widget; 3] = [Widget::ChartData, Widget::Ranking, Widget::TopPrompts];

    pub fn title(&self) -> &'static str {
        match self {
            Widget::ChartData => "Visibility over time",
            Widget::Ranking => "Ranking",
            Widget::TopPrompts => "Top prompts",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Stats,
    Queries,
    Query(&'a QueryId),
    TrackQuery(&'a QueryId),
    TrackAll,
    Results(&'a QueryId),
    Models,
    Widget(Widget),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Stats => "/api/stats".to_string(),
            Endpoint::Queries => "/api/queries".to_string(),
            Endpoint::Query(id) => format!("/api/queries/{}", encode_segment(id.as_str())),
            Endpoint::TrackQuery(id) => format!("/api/queries/{}/track", encode_segment(id.as_str())),
            Endpoint::TrackAll => "/api/track-all".to_string(),
            Endpoint::Results(id) => format!("/api/queries/{}/results", encode_segment(id.as_str())),
            Endpoint::Models => "/api/models".to_string(),
            Endpoint::Widget(Widget::ChartData) => "/api/chart-data".to_string(),
            Endpoint::Widget(Widget::Ranking) => "/api/ranking".to_string(),
            Endpoint::Widget(Widget::TopPrompts) => "/api/top-prompts".to_string(),
        }
    }
}
