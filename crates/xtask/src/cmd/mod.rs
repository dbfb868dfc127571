mod font_metrics;

pub(crate) use font_metrics::gen_font_metrics;
