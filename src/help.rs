//! Help text for the interactive prompt.

pub const PROMPT_HELP: &str = "
To analyze a text in a web page or file, enter its URL or path as the last
argument of the command.

Optional flags modify the output:

-rt   Remove all HTML tags before counting. Use it to see statistics for
      the words visible on the page instead of the raw HTML.
-sa   Sort the words that appear more than the threshold alphabetically.
-sn   Sort the words that appear more than the threshold from the most
      frequent to the least frequent.
-c    Quit.

If both -sa and -sn are given, the output is sorted by frequency.

Example: -rt -sa https://en.wikipedia.org/wiki/Main_Page
";
