pub mod u601_submit_text_data;
